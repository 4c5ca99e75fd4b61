//! Product entities and their mutation shapes.
//!
//! The serde representation mirrors the persisted catalog layout exactly:
//! plain JSON numbers for `price` and `rating`, camelCase `inStock`. Catalogs
//! written by earlier builds must keep loading unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// A sellable product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id within the catalog.
    pub id: ProductId,
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image locator, opaque to the core.
    pub image: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub description: String,
    /// Ordered feature bullet points; empty strings are permitted while a
    /// product is being edited in the admin surface.
    pub features: Vec<String>,
    /// Star rating in [0, 5].
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Decimal,
    pub reviews: u32,
}

impl Product {
    /// Merge a partial patch onto this product. Only supplied fields change.
    pub fn apply_patch(&mut self, patch: ProductPatch) {
        let ProductPatch {
            name,
            category,
            price,
            image,
            in_stock,
            description,
            features,
            rating,
            reviews,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(image) = image {
            self.image = image;
        }
        if let Some(in_stock) = in_stock {
            self.in_stock = in_stock;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(features) = features {
            self.features = features;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(reviews) = reviews {
            self.reviews = reviews;
        }
    }
}

/// Input for creating a product: everything the caller supplies.
///
/// The catalog store generates the id and defaults `rating` and `reviews`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub in_stock: bool,
    pub description: String,
    pub features: Vec<String>,
}

/// A partial update: `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub in_stock: Option<bool>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub rating: Option<Decimal>,
    pub reviews: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("3"),
            name: "Netflix Premium 4K".to_owned(),
            category: "Streaming".to_owned(),
            price: Decimal::new(499, 2),
            image: "https://example.com/netflix.jpg".to_owned(),
            in_stock: true,
            description: "4K UHD streaming profile.".to_owned(),
            features: vec!["4K Ultra HD".to_owned(), "4 Screens Allowed".to_owned()],
            rating: Decimal::new(50, 1),
            reviews: 1250,
        }
    }

    #[test]
    fn test_patch_changes_only_supplied_fields() {
        let mut product = sample();
        let before = product.clone();
        product.apply_patch(ProductPatch {
            price: Some(Decimal::new(999, 2)),
            ..ProductPatch::default()
        });

        assert_eq!(product.price, Decimal::new(999, 2));
        assert_eq!(product.id, before.id);
        assert_eq!(product.name, before.name);
        assert_eq!(product.category, before.category);
        assert_eq!(product.image, before.image);
        assert_eq!(product.in_stock, before.in_stock);
        assert_eq!(product.description, before.description);
        assert_eq!(product.features, before.features);
        assert_eq!(product.rating, before.rating);
        assert_eq!(product.reviews, before.reviews);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut product = sample();
        let before = product.clone();
        product.apply_patch(ProductPatch::default());
        assert_eq!(product, before);
    }

    #[test]
    fn test_serde_matches_persisted_layout() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["inStock"], serde_json::json!(true));
        assert_eq!(json["price"], serde_json::json!(4.99));
        assert_eq!(json["rating"], serde_json::json!(5.0));
        assert!(json.get("in_stock").is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let product = sample();
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
