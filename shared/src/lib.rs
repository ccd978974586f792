//! Shared types for the laptop storefront
//!
//! Common types used across the workspace: data models, the unified
//! error system, and the catalog query types.

pub mod error;
pub mod models;
pub mod query;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CartItem, CartLine, CartSummary, Laptop, Purpose, User};
pub use query::{FilterOptions, FilterState, PriceRange, SortOption};
