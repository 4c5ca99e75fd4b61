//! The shopping cart store.
//!
//! The cart holds full product snapshots, not references: once a product is
//! added, later catalog edits or deletions never touch the entry. The same
//! product id may appear any number of times; each add appends one entry.
//!
//! No stock check happens here. Gating out-of-stock products is the
//! rendering surface's responsibility.

use digivault_core::{Product, ProductId};
use rust_decimal::Decimal;

/// An ordered list of product snapshots pending checkout.
#[derive(Debug, Default)]
pub struct CartStore {
    items: Vec<Product>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entries in add order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a snapshot of `product`.
    pub fn add(&mut self, product: &Product) {
        self.items.push(product.clone());
    }

    /// Remove the first (lowest-index) entry whose id matches. Later
    /// duplicates stay. Silent no-op when nothing matches.
    pub fn remove_first(&mut self, id: &ProductId) {
        if let Some(index) = self.items.iter().position(|item| &item.id == id) {
            self.items.remove(index);
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of entry prices. Derived on demand, never stored.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.price).sum()
    }
}
