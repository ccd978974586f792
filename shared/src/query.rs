//! Catalog query types
//!
//! The caller-owned filter/sort specification and the facet projection
//! the engine derives from the dataset. Mutation is wholesale
//! replacement; the engine recomputes its result view on every call.

use crate::models::Purpose;
use serde::{Deserialize, Serialize};

/// Inclusive price window in som
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub low: i64,
    pub high: i64,
}

impl PriceRange {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// The widest possible window (no effective price restriction)
    pub fn full() -> Self {
        Self {
            low: 0,
            high: i64::MAX,
        }
    }

    /// Inclusive membership test. A window with `low > high` contains
    /// nothing.
    pub fn contains(&self, price: i64) -> bool {
        price >= self.low && price <= self.high
    }
}

/// Filter facets derived from the full product set
///
/// A pure projection of the dataset; it has no independent lifecycle.
/// `price_range` is `None` only for an empty catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOptions {
    /// Distinct brands, in dataset order
    pub brands: Vec<String>,
    /// Pointwise min/max of all prices
    pub price_range: Option<PriceRange>,
    /// Distinct RAM values in gigabytes, ascending
    pub ram_options: Vec<u32>,
    /// Distinct purpose tags, in dataset order
    pub purposes: Vec<Purpose>,
}

/// Result ordering
///
/// Affects only the ordering of the filtered result, never membership.
/// `Newest` and `Popular` are two-way boolean partitions, not rankings;
/// ties keep their prior relative order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Popular items first (default)
    #[default]
    Popular,
    /// Price, increasing
    PriceAsc,
    /// Price, decreasing
    PriceDesc,
    /// New items first
    Newest,
}

/// The mutable filter specification the presentation layer owns
///
/// Empty brand/RAM/purpose sets and an empty search string mean "no
/// restriction"; the price window always applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub brands: Vec<String>,
    pub price_range: PriceRange,
    pub ram: Vec<u32>,
    pub purposes: Vec<Purpose>,
    pub search: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::unrestricted()
    }
}

impl FilterState {
    /// A state that matches every product
    pub fn unrestricted() -> Self {
        Self {
            brands: Vec::new(),
            price_range: PriceRange::full(),
            ram: Vec::new(),
            purposes: Vec::new(),
            search: String::new(),
        }
    }

    /// A state with the price window initialized to the facet bounds
    pub fn for_facets(facets: &FilterOptions) -> Self {
        Self {
            price_range: facets.price_range.unwrap_or_else(PriceRange::full),
            ..Self::unrestricted()
        }
    }

    /// A state restricted to a single brand (category-link target)
    pub fn for_brand(brand: impl Into<String>, facets: &FilterOptions) -> Self {
        Self {
            brands: vec![brand.into()],
            ..Self::for_facets(facets)
        }
    }

    /// A state restricted to a single purpose tag (category-link target)
    pub fn for_purpose(purpose: Purpose, facets: &FilterOptions) -> Self {
        Self {
            purposes: vec![purpose],
            ..Self::for_facets(facets)
        }
    }

    /// Set the free-text search string
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Drop every restriction, resetting the price window to the facet
    /// bounds
    pub fn reset(&mut self, facets: &FilterOptions) {
        *self = Self::for_facets(facets);
    }

    /// Whether any facet is currently restricted relative to the given
    /// facet bounds (drives the "reset filters" affordance)
    pub fn is_restricted(&self, facets: &FilterOptions) -> bool {
        let full = facets.price_range.unwrap_or_else(PriceRange::full);
        !self.brands.is_empty()
            || !self.ram.is_empty()
            || !self.purposes.is_empty()
            || !self.search.is_empty()
            || self.price_range != full
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets() -> FilterOptions {
        FilterOptions {
            brands: vec!["ASUS".to_string(), "Apple".to_string()],
            price_range: Some(PriceRange::new(45000, 295000)),
            ram_options: vec![8, 16, 32],
            purposes: vec![Purpose::Gaming, Purpose::Student],
        }
    }

    #[test]
    fn test_price_range_contains() {
        let range = PriceRange::new(100, 200);
        assert!(range.contains(100));
        assert!(range.contains(200));
        assert!(!range.contains(99));
        assert!(!range.contains(201));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = PriceRange::new(200, 100);
        assert!(!range.contains(150));
        assert!(!range.contains(100));
        assert!(!range.contains(200));
    }

    #[test]
    fn test_for_facets_uses_bounds() {
        let state = FilterState::for_facets(&facets());
        assert_eq!(state.price_range, PriceRange::new(45000, 295000));
        assert!(!state.is_restricted(&facets()));
    }

    #[test]
    fn test_for_brand() {
        let state = FilterState::for_brand("Apple", &facets());
        assert_eq!(state.brands, vec!["Apple".to_string()]);
        assert!(state.is_restricted(&facets()));
    }

    #[test]
    fn test_reset_clears_restrictions() {
        let mut state = FilterState::for_purpose(Purpose::Gaming, &facets()).with_search("rog");
        assert!(state.is_restricted(&facets()));
        state.reset(&facets());
        assert!(!state.is_restricted(&facets()));
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_narrowed_price_window_is_restricted() {
        let mut state = FilterState::for_facets(&facets());
        state.price_range = PriceRange::new(50000, 100000);
        assert!(state.is_restricted(&facets()));
    }

    #[test]
    fn test_sort_option_serde() {
        assert_eq!(
            serde_json::to_string(&SortOption::PriceAsc).unwrap(),
            "\"price-asc\""
        );
        let opt: SortOption = serde_json::from_str("\"newest\"").unwrap();
        assert_eq!(opt, SortOption::Newest);
        assert_eq!(SortOption::default(), SortOption::Popular);
    }
}
