//! Catalog query engine
//!
//! Owns the canonical laptop set and answers every catalog query the
//! storefront needs: facet derivation, filtering, sorting, point lookup,
//! similarity lookup, and featured selections. Every operation is a
//! pure, synchronous function of its inputs plus the immutable dataset;
//! there is no caching and no hidden state.

mod dataset;
mod engine;

pub use dataset::builtin_laptops;
pub use engine::{Catalog, DEFAULT_SIMILAR_LIMIT, sort_results};
