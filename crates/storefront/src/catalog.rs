//! The catalog store: products and categories.
//!
//! Single source of truth for everything sellable. Reads happen from the
//! public browse surface; mutations only arrive through the gate-checked
//! admin surface. Every mutation synchronously re-serializes the affected
//! list to storage before returning.
//!
//! Storage problems are never user-visible: a missing or malformed blob at
//! load time falls back to the built-in seed catalog, and a failed write is
//! logged and swallowed.

use digivault_core::{Product, ProductDraft, ProductId, ProductPatch};
use rust_decimal::Decimal;
use tracing::{debug, error, info, warn};

use crate::seed;
use crate::storage::{CATEGORIES_KEY, PRODUCTS_KEY, StorageBackend};

/// The mutable product/category inventory.
pub struct CatalogStore {
    products: Vec<Product>,
    categories: Vec<String>,
    storage: Box<dyn StorageBackend>,
}

impl CatalogStore {
    /// Load the catalog from storage, falling back to seed data per key.
    pub fn load(storage: Box<dyn StorageBackend>) -> Self {
        let products = load_key(storage.as_ref(), PRODUCTS_KEY, seed::products);
        let categories = load_key(storage.as_ref(), CATEGORIES_KEY, seed::categories);
        Self {
            products,
            categories,
            storage,
        }
    }

    /// Current products, newest-first.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Current category names, in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Create a product from a draft and prepend it to the catalog.
    ///
    /// The store generates the id and defaults `rating` to 5.0 and `reviews`
    /// to 0. Returns the stored product.
    pub fn add_product(&mut self, draft: ProductDraft) -> &Product {
        let product = Product {
            id: self.fresh_id(),
            name: draft.name,
            category: draft.category,
            price: draft.price,
            image: draft.image,
            in_stock: draft.in_stock,
            description: draft.description,
            features: draft.features,
            rating: Decimal::new(50, 1),
            reviews: 0,
        };
        self.products.insert(0, product);
        self.persist_products();
        // Just inserted at the front.
        &self.products[0]
    }

    /// Merge a partial patch onto the product matching `id`.
    ///
    /// Silent no-op if no product matches; not-found is not an error here.
    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) {
        let Some(product) = self.products.iter_mut().find(|p| &p.id == id) else {
            debug!(%id, "update for unknown product ignored");
            return;
        };
        product.apply_patch(patch);
        self.persist_products();
    }

    /// Remove the product matching `id`. Silent no-op if absent.
    pub fn delete_product(&mut self, id: &ProductId) {
        let before = self.products.len();
        self.products.retain(|p| &p.id != id);
        if self.products.len() == before {
            debug!(%id, "delete for unknown product ignored");
            return;
        }
        self.persist_products();
    }

    /// Append a category name.
    ///
    /// The name is trimmed first; blank names and exact (case-sensitive)
    /// duplicates are silent no-ops.
    pub fn add_category(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|c| c == name) {
            return;
        }
        self.categories.push(name.to_owned());
        self.persist_categories();
    }

    /// Remove all occurrences of a category name.
    ///
    /// Products referencing the name keep it; an orphaned category reference
    /// stays valid and displayable.
    pub fn delete_category(&mut self, name: &str) {
        self.categories.retain(|c| c != name);
        self.persist_categories();
    }

    /// Replace the whole catalog with the built-in seed data and persist it.
    pub fn reset_to_seed(&mut self) {
        self.products = seed::products();
        self.categories = seed::categories();
        self.persist_products();
        self.persist_categories();
    }

    /// Generate an id not present in the current catalog.
    ///
    /// A 128-bit random id cannot realistically collide, but the catalog also
    /// holds short legacy seed ids, so the uniqueness invariant is checked
    /// rather than assumed.
    fn fresh_id(&self) -> ProductId {
        loop {
            let id = ProductId::generate();
            if self.product(&id).is_none() {
                return id;
            }
        }
    }

    fn persist_products(&mut self) {
        persist(self.storage.as_mut(), PRODUCTS_KEY, &self.products);
    }

    fn persist_categories(&mut self) {
        persist(self.storage.as_mut(), CATEGORIES_KEY, &self.categories);
    }
}

/// Read and decode one storage key, falling back to `seed` on anything
/// unusable. Never fails.
fn load_key<T, F>(storage: &dyn StorageBackend, key: &str, seed: F) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    let blob = match storage.read(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!(key, "no persisted data, using seed data");
            return seed();
        }
        Err(err) => {
            warn!(key, error = %err, "storage unreadable, using seed data");
            return seed();
        }
    };
    match serde_json::from_str(&blob) {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = %err, "persisted data malformed, using seed data");
            seed()
        }
    }
}

/// Serialize a list and write it under `key`. Failures are logged, never
/// propagated; the in-memory catalog stays authoritative for this session.
fn persist<T: serde::Serialize>(storage: &mut dyn StorageBackend, key: &str, value: &T) {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            error!(key, error = %err, "failed to serialize catalog data");
            return;
        }
    };
    if let Err(err) = storage.write(key, &json) {
        error!(key, error = %err, "failed to persist catalog data");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use digivault_core::ProductPatch;

    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};

    fn store() -> CatalogStore {
        CatalogStore::load(Box::new(MemoryStorage::new()))
    }

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_owned(),
            category: "Utility".to_owned(),
            price: Decimal::new(199, 2),
            image: "https://example.com/p.jpg".to_owned(),
            in_stock: true,
            description: "A product.".to_owned(),
            features: vec![],
        }
    }

    #[test]
    fn test_loads_seed_when_storage_empty() {
        let catalog = store();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.categories().len(), 4);
    }

    #[test]
    fn test_loads_seed_when_storage_malformed() {
        let storage = MemoryStorage::new()
            .with_entry(PRODUCTS_KEY, "not json at all")
            .with_entry(CATEGORIES_KEY, "{\"wrong\": \"shape\"}");
        let catalog = CatalogStore::load(Box::new(storage));
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.categories(), seed::categories().as_slice());
    }

    #[test]
    fn test_loads_persisted_over_seed() {
        let storage = MemoryStorage::new()
            .with_entry(PRODUCTS_KEY, "[]")
            .with_entry(CATEGORIES_KEY, r#"["Gaming"]"#);
        let catalog = CatalogStore::load(Box::new(storage));
        assert!(catalog.products().is_empty());
        assert_eq!(catalog.categories(), &["Gaming".to_owned()]);
    }

    #[test]
    fn test_add_product_prepends_with_defaults() {
        let mut catalog = store();
        let added = catalog.add_product(draft("Figma Pro")).clone();
        assert_eq!(added.rating, Decimal::new(50, 1));
        assert_eq!(added.reviews, 0);
        assert_eq!(catalog.products().first().unwrap().id, added.id);
        assert_eq!(catalog.products().len(), 9);
    }

    #[test]
    fn test_ids_stay_unique_under_add_and_delete() {
        let mut catalog = store();
        for i in 0..20 {
            catalog.add_product(draft(&format!("Product {i}")));
        }
        let third = catalog.products()[3].id.clone();
        catalog.delete_product(&third);

        let products = catalog.products();
        for (i, a) in products.iter().enumerate() {
            for b in products.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut catalog = store();
        let before = catalog.products().to_vec();
        catalog.update_product(
            &ProductId::new("missing"),
            ProductPatch {
                price: Some(Decimal::new(100, 2)),
                ..ProductPatch::default()
            },
        );
        assert_eq!(catalog.products(), before.as_slice());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut catalog = store();
        catalog.delete_product(&ProductId::new("missing"));
        assert_eq!(catalog.products().len(), 8);
    }

    #[test]
    fn test_add_category_trims_and_dedupes() {
        let mut catalog = store();
        catalog.add_category("  Gaming  ");
        assert!(catalog.categories().contains(&"Gaming".to_owned()));

        let len = catalog.categories().len();
        catalog.add_category("Gaming");
        catalog.add_category("   ");
        catalog.add_category("");
        assert_eq!(catalog.categories().len(), len);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let mut catalog = store();
        let len = catalog.categories().len();
        catalog.add_category("video");
        // "Video" exists in the seed, "video" is a distinct name.
        assert_eq!(catalog.categories().len(), len + 1);
    }

    #[test]
    fn test_delete_category_leaves_products_orphaned() {
        let mut catalog = store();
        catalog.delete_category("Streaming");
        assert!(!catalog.categories().contains(&"Streaming".to_owned()));
        assert!(
            catalog
                .products()
                .iter()
                .any(|p| p.category == "Streaming"),
            "products keep the deleted category name"
        );
    }

    #[test]
    fn test_mutations_persist_and_reload_identically() {
        let dir = tempfile::tempdir().unwrap();
        let mut catalog = CatalogStore::load(Box::new(FileStorage::new(dir.path())));
        catalog.add_category("Gaming");
        catalog.add_product(draft("Figma Pro"));
        let gone = catalog.products()[4].id.clone();
        catalog.delete_product(&gone);

        let reloaded = CatalogStore::load(Box::new(FileStorage::new(dir.path())));
        assert_eq!(reloaded.products(), catalog.products());
        assert_eq!(reloaded.categories(), catalog.categories());
    }
}
