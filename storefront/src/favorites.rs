//! Favorites manager
//!
//! A per-scope list of laptop ids; the laptop view is joined with the
//! catalog on every read.

use crate::storage::{Scope, StoreStorage};
use catalog::Catalog;
use shared::{AppResult, Laptop};
use std::sync::Arc;

#[derive(Clone)]
pub struct FavoritesManager {
    storage: StoreStorage,
    catalog: Arc<Catalog>,
}

impl FavoritesManager {
    pub fn new(storage: StoreStorage, catalog: Arc<Catalog>) -> Self {
        Self { storage, catalog }
    }

    /// The persisted ids for a scope, in insertion order
    pub fn ids(&self, scope: &Scope) -> AppResult<Vec<String>> {
        Ok(self.storage.load_favorites(scope)?)
    }

    /// Favorite laptops joined with the catalog; stale ids are dropped
    pub fn laptops(&self, scope: &Scope) -> AppResult<Vec<Laptop>> {
        let ids = self.storage.load_favorites(scope)?;
        Ok(ids
            .iter()
            .filter_map(|id| self.catalog.get_by_id(id).cloned())
            .collect())
    }

    /// Add an id; already-present ids are left alone
    pub fn add(&self, scope: &Scope, laptop_id: &str) -> AppResult<Vec<String>> {
        let mut ids = self.storage.load_favorites(scope)?;
        if !ids.iter().any(|id| id == laptop_id) {
            ids.push(laptop_id.to_string());
            self.storage.save_favorites(scope, &ids)?;
            tracing::debug!(scope = %scope.key(), laptop_id, "added to favorites");
        }
        Ok(ids)
    }

    pub fn remove(&self, scope: &Scope, laptop_id: &str) -> AppResult<Vec<String>> {
        let mut ids = self.storage.load_favorites(scope)?;
        ids.retain(|id| id != laptop_id);
        self.storage.save_favorites(scope, &ids)?;
        Ok(ids)
    }

    pub fn is_favorite(&self, scope: &Scope, laptop_id: &str) -> AppResult<bool> {
        Ok(self
            .storage
            .load_favorites(scope)?
            .iter()
            .any(|id| id == laptop_id))
    }
}
