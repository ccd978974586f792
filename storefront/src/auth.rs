//! Mock authentication service
//!
//! An in-memory credential registry behind the same contract a real
//! credential service would honor: login verifies an email/password
//! pair, registration always succeeds and mints a new user record, and
//! the signed-in identity is persisted as the session row. Password
//! digests are SHA-256 hex. This is a demo boundary, not a real
//! credential service.

use crate::storage::{Scope, StoreStorage};
use chrono::Utc;
use shared::{AppError, AppResult, User};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// Credentials of the demo account seeded at construction
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";

struct StoredCredential {
    user: User,
    password_digest: String,
}

pub struct AuthService {
    storage: StoreStorage,
    /// Registered accounts, keyed by email
    users: RwLock<HashMap<String, StoredCredential>>,
}

impl AuthService {
    pub fn new(storage: StoreStorage) -> Self {
        let demo = StoredCredential {
            user: User {
                id: "1".to_string(),
                email: DEMO_EMAIL.to_string(),
                name: "Demo User".to_string(),
                created_at: Utc::now(),
            },
            password_digest: digest(DEMO_PASSWORD),
        };
        let mut users = HashMap::new();
        users.insert(DEMO_EMAIL.to_string(), demo);
        Self {
            storage,
            users: RwLock::new(users),
        }
    }

    /// Verify an email/password pair; success persists the session
    pub fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let users = self.users.read().expect("Failed to lock users");
        let credential = users.get(email).ok_or_else(AppError::invalid_credentials)?;
        if credential.password_digest != digest(password) {
            return Err(AppError::invalid_credentials());
        }
        let user = credential.user.clone();
        drop(users);

        self.storage.save_session(&user)?;
        tracing::info!(user_id = %user.id, "login");
        Ok(user)
    }

    /// Mint a new account and sign it in; always succeeds
    ///
    /// Re-registering an existing email replaces the stored credential,
    /// matching the original storefront's behavior.
    pub fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        let credential = StoredCredential {
            user: user.clone(),
            password_digest: digest(password),
        };
        self.users
            .write()
            .expect("Failed to lock users")
            .insert(email.to_string(), credential);

        self.storage.save_session(&user)?;
        tracing::info!(user_id = %user.id, "registered");
        Ok(user)
    }

    /// The signed-in user, if any (malformed session rows read as None)
    pub fn current_user(&self) -> AppResult<Option<User>> {
        Ok(self.storage.load_session()?)
    }

    /// Clear the session
    pub fn logout(&self) -> AppResult<()> {
        self.storage.clear_session()?;
        tracing::info!("logout");
        Ok(())
    }

    /// The active persistence scope for cart/favorites namespacing
    pub fn scope(&self) -> AppResult<Scope> {
        Ok(Scope::for_user(self.current_user()?.as_ref()))
    }
}

fn digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
