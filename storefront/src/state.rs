//! Storefront wiring
//!
//! Composes the catalog, storage and managers into one value the
//! presentation layer holds. The catalog is injected, never a process
//! global, so tests run against synthetic datasets.

use crate::auth::AuthService;
use crate::cart::CartManager;
use crate::favorites::FavoritesManager;
use crate::storage::{Scope, StoreStorage};
use catalog::Catalog;
use shared::AppResult;
use std::path::Path;
use std::sync::Arc;

pub struct Storefront {
    catalog: Arc<Catalog>,
    auth: AuthService,
    cart: CartManager,
    favorites: FavoritesManager,
}

impl Storefront {
    /// Open the storefront over the builtin catalog, persisting at
    /// `path`
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let storage = StoreStorage::open(path)?;
        let catalog = Arc::new(Catalog::builtin()?);
        Ok(Self::with_catalog(storage, catalog))
    }

    /// Open the storefront over the builtin catalog with in-memory
    /// persistence (tests, demos)
    pub fn in_memory() -> AppResult<Self> {
        let storage = StoreStorage::open_in_memory()?;
        let catalog = Arc::new(Catalog::builtin()?);
        Ok(Self::with_catalog(storage, catalog))
    }

    /// Wire the managers around an injected catalog
    pub fn with_catalog(storage: StoreStorage, catalog: Arc<Catalog>) -> Self {
        let auth = AuthService::new(storage.clone());
        let cart = CartManager::new(storage.clone(), catalog.clone());
        let favorites = FavoritesManager::new(storage, catalog.clone());
        Self {
            catalog,
            auth,
            cart,
            favorites,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoritesManager {
        &self.favorites
    }

    /// The active persistence scope (guest until someone signs in)
    pub fn scope(&self) -> AppResult<Scope> {
        self.auth.scope()
    }
}
