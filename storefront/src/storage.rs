//! redb-based storage for carts, favorites and the auth session
//!
//! One row per scope and concern, JSON-encoded values. Writes are
//! last-write-wins inside a single transaction; absent or malformed
//! payloads decode to the empty default, never an error.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::{AppError, CartItem, User};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Cart lines: key = scope key, value = JSON `Vec<CartItem>`
const CARTS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("carts");

/// Favorite laptop ids: key = scope key, value = JSON `Vec<String>`
const FAVORITES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("favorites");

/// Auth session: single row under [`SESSION_KEY`], value = JSON `User`
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session");

const SESSION_KEY: &str = "current_user";

#[derive(Debug, Error)]
pub enum StoreStorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreStorageResult<T> = Result<T, StoreStorageError>;

impl From<StoreStorageError> for AppError {
    fn from(err: StoreStorageError) -> Self {
        match err {
            StoreStorageError::Serialization(e) => AppError::internal(e.to_string()),
            other => AppError::database(other.to_string()),
        }
    }
}

/// Persistence namespace
///
/// Every cart/favorites row is keyed by the scope of the identity that
/// owns it, so switching the signed-in user switches the visible state
/// without cross-contamination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Anonymous visitor
    Guest,
    /// Signed-in user (value is the user id)
    User(String),
}

impl Scope {
    pub fn for_user(user: Option<&User>) -> Self {
        match user {
            Some(u) => Self::User(u.id.clone()),
            None => Self::Guest,
        }
    }

    /// Key under which this scope's rows are stored
    pub fn key(&self) -> String {
        match self {
            Self::Guest => "guest".to_string(),
            Self::User(id) => format!("user:{id}"),
        }
    }
}

/// Cart/favorites/session storage
#[derive(Clone)]
pub struct StoreStorage {
    db: Arc<Database>,
}

impl StoreStorage {
    /// Open or create the database at `path`
    pub fn open(path: impl AsRef<Path>) -> StoreStorageResult<Self> {
        let db = Database::create(path)?;
        Self::with_database(db)
    }

    /// Open an in-memory database (tests, demos)
    pub fn open_in_memory() -> StoreStorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::with_database(db)
    }

    fn with_database(db: Database) -> StoreStorageResult<Self> {
        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CARTS_TABLE)?;
            let _ = write_txn.open_table(FAVORITES_TABLE)?;
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    // ========== Carts ==========

    pub fn load_cart(&self, scope: &Scope) -> StoreStorageResult<Vec<CartItem>> {
        let Some(raw) = self.read_raw(CARTS_TABLE, &scope.key())? else {
            return Ok(Vec::new());
        };
        Ok(decode_or_default(&raw, "cart", &scope.key()))
    }

    pub fn save_cart(&self, scope: &Scope, items: &[CartItem]) -> StoreStorageResult<()> {
        let value = serde_json::to_vec(items)?;
        self.write_raw(CARTS_TABLE, &scope.key(), &value)
    }

    // ========== Favorites ==========

    pub fn load_favorites(&self, scope: &Scope) -> StoreStorageResult<Vec<String>> {
        let Some(raw) = self.read_raw(FAVORITES_TABLE, &scope.key())? else {
            return Ok(Vec::new());
        };
        Ok(decode_or_default(&raw, "favorites", &scope.key()))
    }

    pub fn save_favorites(&self, scope: &Scope, ids: &[String]) -> StoreStorageResult<()> {
        let value = serde_json::to_vec(ids)?;
        self.write_raw(FAVORITES_TABLE, &scope.key(), &value)
    }

    // ========== Session ==========

    pub fn load_session(&self) -> StoreStorageResult<Option<User>> {
        let Some(raw) = self.read_raw(SESSION_TABLE, SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_slice(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(error = %e, "malformed session payload, treating as signed out");
                Ok(None)
            }
        }
    }

    pub fn save_session(&self, user: &User) -> StoreStorageResult<()> {
        let value = serde_json::to_vec(user)?;
        self.write_raw(SESSION_TABLE, SESSION_KEY, &value)
    }

    pub fn clear_session(&self) -> StoreStorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(SESSION_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Raw access ==========

    fn read_raw(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
    ) -> StoreStorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(table)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_vec()))
    }

    fn write_raw(
        &self,
        table: TableDefinition<&str, &[u8]>,
        key: &str,
        value: &[u8],
    ) -> StoreStorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut t = write_txn.open_table(table)?;
            t.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

fn decode_or_default<T: serde::de::DeserializeOwned + Default>(
    raw: &[u8],
    concern: &str,
    key: &str,
) -> T {
    match serde_json::from_slice(raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(concern, key, error = %e, "malformed payload, treating as empty");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            email: format!("{id}@example.com"),
            name: "Test User".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cart_round_trip() {
        let storage = StoreStorage::open_in_memory().unwrap();
        let scope = Scope::Guest;
        assert!(storage.load_cart(&scope).unwrap().is_empty());

        let items = vec![CartItem {
            laptop_id: "asus-vivobook-15".to_string(),
            quantity: 2,
        }];
        storage.save_cart(&scope, &items).unwrap();
        assert_eq!(storage.load_cart(&scope).unwrap(), items);
    }

    #[test]
    fn test_scopes_are_isolated() {
        let storage = StoreStorage::open_in_memory().unwrap();
        let guest = Scope::Guest;
        let alice = Scope::User("alice".to_string());

        storage
            .save_cart(
                &guest,
                &[CartItem {
                    laptop_id: "a".to_string(),
                    quantity: 1,
                }],
            )
            .unwrap();
        storage
            .save_favorites(&alice, &["b".to_string()])
            .unwrap();

        assert!(storage.load_cart(&alice).unwrap().is_empty());
        assert!(storage.load_favorites(&guest).unwrap().is_empty());
        assert_eq!(storage.load_cart(&guest).unwrap().len(), 1);
        assert_eq!(storage.load_favorites(&alice).unwrap().len(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let storage = StoreStorage::open_in_memory().unwrap();
        let scope = Scope::Guest;
        storage
            .save_favorites(&scope, &["a".to_string(), "b".to_string()])
            .unwrap();
        storage.save_favorites(&scope, &["c".to_string()]).unwrap();
        assert_eq!(storage.load_favorites(&scope).unwrap(), vec!["c".to_string()]);
    }

    #[test]
    fn test_malformed_payload_decodes_as_empty() {
        let storage = StoreStorage::open_in_memory().unwrap();
        let scope = Scope::Guest;
        storage
            .write_raw(CARTS_TABLE, &scope.key(), b"{not json")
            .unwrap();
        assert!(storage.load_cart(&scope).unwrap().is_empty());

        storage
            .write_raw(SESSION_TABLE, SESSION_KEY, b"[]")
            .unwrap();
        assert_eq!(storage.load_session().unwrap(), None);
    }

    #[test]
    fn test_session_round_trip() {
        let storage = StoreStorage::open_in_memory().unwrap();
        assert_eq!(storage.load_session().unwrap(), None);

        let u = user("u1");
        storage.save_session(&u).unwrap();
        assert_eq!(storage.load_session().unwrap(), Some(u));

        storage.clear_session().unwrap();
        assert_eq!(storage.load_session().unwrap(), None);
    }

    #[test]
    fn test_scope_keys() {
        assert_eq!(Scope::Guest.key(), "guest");
        assert_eq!(Scope::User("42".to_string()).key(), "user:42");
        assert_eq!(Scope::for_user(None), Scope::Guest);
        assert_eq!(
            Scope::for_user(Some(&user("42"))),
            Scope::User("42".to_string())
        );
    }
}
