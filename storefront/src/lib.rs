//! Storefront session layer
//!
//! Everything that sits between the catalog engine and the presentation
//! layer: redb-backed persistence for carts, favorites and the auth
//! session, the managers that own those flows, and the [`Storefront`]
//! wiring type that composes them around a dependency-injected catalog.

pub mod auth;
pub mod cart;
pub mod favorites;
pub mod state;
pub mod storage;

// Re-exports
pub use auth::AuthService;
pub use cart::CartManager;
pub use favorites::FavoritesManager;
pub use state::Storefront;
pub use storage::{Scope, StoreStorage, StoreStorageError, StoreStorageResult};
