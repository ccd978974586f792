//! Cart manager
//!
//! Cart state is a list of (laptop id, quantity) lines persisted per
//! scope. Views (lines, summary) are recomputed from storage plus the
//! catalog on every call; nothing is cached.

use crate::storage::{Scope, StoreStorage};
use catalog::Catalog;
use shared::{AppError, AppResult, CartItem, CartLine, CartSummary};
use std::sync::Arc;

#[derive(Clone)]
pub struct CartManager {
    storage: StoreStorage,
    catalog: Arc<Catalog>,
}

impl CartManager {
    pub fn new(storage: StoreStorage, catalog: Arc<Catalog>) -> Self {
        Self { storage, catalog }
    }

    /// The persisted lines for a scope
    pub fn items(&self, scope: &Scope) -> AppResult<Vec<CartItem>> {
        Ok(self.storage.load_cart(scope)?)
    }

    /// Lines joined with their catalog records
    ///
    /// Ids no longer present in the catalog are dropped from the view;
    /// a stale reference is not an error.
    pub fn lines(&self, scope: &Scope) -> AppResult<Vec<CartLine>> {
        let items = self.storage.load_cart(scope)?;
        let lines = items
            .into_iter()
            .filter_map(|item| {
                let laptop = self.catalog.get_by_id(&item.laptop_id);
                if laptop.is_none() {
                    tracing::warn!(laptop_id = %item.laptop_id, "cart references unknown laptop, dropping line");
                }
                laptop.map(|laptop| CartLine {
                    laptop: laptop.clone(),
                    quantity: item.quantity,
                })
            })
            .collect();
        Ok(lines)
    }

    /// Derived totals for a scope
    pub fn summary(&self, scope: &Scope) -> AppResult<CartSummary> {
        Ok(CartSummary::from_lines(&self.lines(scope)?))
    }

    /// Add one unit of a laptop; an existing line increments instead
    pub fn add(&self, scope: &Scope, laptop_id: &str) -> AppResult<Vec<CartItem>> {
        if self.catalog.get_by_id(laptop_id).is_none() {
            return Err(AppError::product_not_found(laptop_id));
        }

        let mut items = self.storage.load_cart(scope)?;
        match items.iter_mut().find(|i| i.laptop_id == laptop_id) {
            Some(item) => item.quantity += 1,
            None => items.push(CartItem {
                laptop_id: laptop_id.to_string(),
                quantity: 1,
            }),
        }
        self.storage.save_cart(scope, &items)?;
        tracing::debug!(scope = %scope.key(), laptop_id, "added to cart");
        Ok(items)
    }

    /// Remove a line entirely
    pub fn remove(&self, scope: &Scope, laptop_id: &str) -> AppResult<Vec<CartItem>> {
        let mut items = self.storage.load_cart(scope)?;
        items.retain(|i| i.laptop_id != laptop_id);
        self.storage.save_cart(scope, &items)?;
        Ok(items)
    }

    /// Set a line's quantity; anything below 1 removes the line
    pub fn update_quantity(
        &self,
        scope: &Scope,
        laptop_id: &str,
        quantity: i32,
    ) -> AppResult<Vec<CartItem>> {
        if quantity < 1 {
            return self.remove(scope, laptop_id);
        }
        let mut items = self.storage.load_cart(scope)?;
        if let Some(item) = items.iter_mut().find(|i| i.laptop_id == laptop_id) {
            item.quantity = quantity;
        }
        self.storage.save_cart(scope, &items)?;
        Ok(items)
    }

    /// Drop every line for a scope
    pub fn clear(&self, scope: &Scope) -> AppResult<()> {
        self.storage.save_cart(scope, &[])?;
        Ok(())
    }
}
