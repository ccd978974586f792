//! Catalog engine
//!
//! The dataset is loaded once and never mutated; all queries clone the
//! matching records, which is cheap at catalog scale (a few dozen
//! records).

use shared::{AppResult, FilterOptions, FilterState, Laptop, PriceRange, SortOption};

/// Default number of similar laptops returned for a product page
pub const DEFAULT_SIMILAR_LIMIT: usize = 4;

/// The canonical laptop set plus every query over it
///
/// Constructed explicitly and passed to whoever needs queries; tests
/// inject synthetic datasets through [`Catalog::new`].
#[derive(Debug, Clone)]
pub struct Catalog {
    laptops: Vec<Laptop>,
}

impl Catalog {
    /// Build a catalog over the given dataset
    pub fn new(laptops: Vec<Laptop>) -> Self {
        Self { laptops }
    }

    /// Build a catalog over the embedded dataset
    pub fn builtin() -> AppResult<Self> {
        Ok(Self::new(crate::dataset::builtin_laptops()?))
    }

    /// The full dataset, in dataset order
    pub fn laptops(&self) -> &[Laptop] {
        &self.laptops
    }

    pub fn len(&self) -> usize {
        self.laptops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laptops.is_empty()
    }

    /// Derive the filter facets from the dataset
    ///
    /// Brand and purpose sets keep dataset order; RAM values are sorted
    /// ascending. `price_range` is `None` for an empty catalog — callers
    /// treat that as the empty-catalog case, not an error.
    pub fn facets(&self) -> FilterOptions {
        let mut brands: Vec<String> = Vec::new();
        for laptop in &self.laptops {
            if !brands.contains(&laptop.brand) {
                brands.push(laptop.brand.clone());
            }
        }

        let mut ram_options: Vec<u32> = self.laptops.iter().map(|l| l.ram).collect();
        ram_options.sort_unstable();
        ram_options.dedup();

        let mut purposes = Vec::new();
        for laptop in &self.laptops {
            for purpose in &laptop.purpose {
                if !purposes.contains(purpose) {
                    purposes.push(*purpose);
                }
            }
        }

        let low = self.laptops.iter().map(|l| l.price).min();
        let high = self.laptops.iter().map(|l| l.price).max();
        let price_range = low.zip(high).map(|(low, high)| PriceRange::new(low, high));

        FilterOptions {
            brands,
            price_range,
            ram_options,
            purposes,
        }
    }

    /// Evaluate the filter state against the dataset
    ///
    /// Logical AND across facets, OR within a facet. The price window
    /// always applies; an inverted window matches nothing.
    pub fn apply_filters(&self, state: &FilterState) -> Vec<Laptop> {
        self.laptops
            .iter()
            .filter(|laptop| matches(state, laptop))
            .cloned()
            .collect()
    }

    /// The result view: filter, then sort
    pub fn query(&self, state: &FilterState, sort: SortOption) -> Vec<Laptop> {
        let mut result = self.apply_filters(state);
        sort_results(&mut result, sort);
        tracing::debug!(
            matched = result.len(),
            total = self.laptops.len(),
            ?sort,
            "catalog query"
        );
        result
    }

    /// Exact-match lookup by identifier; absence is a normal outcome
    pub fn get_by_id(&self, id: &str) -> Option<&Laptop> {
        self.laptops.iter().find(|laptop| laptop.id == id)
    }

    /// Up to `limit` other laptops sharing the brand or a purpose tag
    /// with the target, first-N in dataset order
    ///
    /// An unknown id yields an empty vec.
    pub fn similar(&self, id: &str, limit: usize) -> Vec<Laptop> {
        let Some(target) = self.get_by_id(id) else {
            return Vec::new();
        };
        self.laptops
            .iter()
            .filter(|l| {
                l.id != id
                    && (l.brand == target.brand
                        || l.purpose.iter().any(|p| target.purpose.contains(p)))
            })
            .take(limit)
            .cloned()
            .collect()
    }

    /// First `limit` laptops flagged new, in dataset order
    pub fn new_arrivals(&self, limit: usize) -> Vec<Laptop> {
        self.laptops
            .iter()
            .filter(|l| l.is_new)
            .take(limit)
            .cloned()
            .collect()
    }

    /// First `limit` laptops flagged popular, in dataset order
    pub fn popular(&self, limit: usize) -> Vec<Laptop> {
        self.laptops
            .iter()
            .filter(|l| l.is_popular)
            .take(limit)
            .cloned()
            .collect()
    }
}

/// Stable in-place sort of a result sequence
///
/// `Newest` and `Popular` partition on their boolean flag (flagged items
/// first); ties keep prior order on every option.
pub fn sort_results(items: &mut [Laptop], option: SortOption) {
    match option {
        SortOption::PriceAsc => items.sort_by_key(|l| l.price),
        SortOption::PriceDesc => items.sort_by_key(|l| std::cmp::Reverse(l.price)),
        SortOption::Newest => items.sort_by_key(|l| !l.is_new),
        SortOption::Popular => items.sort_by_key(|l| !l.is_popular),
    }
}

fn matches(state: &FilterState, laptop: &Laptop) -> bool {
    if !state.brands.is_empty() && !state.brands.contains(&laptop.brand) {
        return false;
    }
    if !state.price_range.contains(laptop.price) {
        return false;
    }
    if !state.ram.is_empty() && !state.ram.contains(&laptop.ram) {
        return false;
    }
    if !state.purposes.is_empty() && !laptop.purpose.iter().any(|p| state.purposes.contains(p)) {
        return false;
    }
    if !state.search.is_empty() {
        let needle = state.search.to_lowercase();
        let found = [
            &laptop.brand,
            &laptop.model,
            &laptop.processor,
            &laptop.description,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle));
        if !found {
            return false;
        }
    }
    true
}
