//! Product filtering for the public browse view.
//!
//! A pure function over the catalog: case-insensitive substring match on the
//! product name, combined with an exact category filter where the sentinel
//! [`ALL_CATEGORIES`] matches everything.

use digivault_core::Product;

/// Category filter value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// Filter products by search query and category, preserving catalog order.
#[must_use]
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &str,
) -> Vec<&'a Product> {
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|product| {
            let matches_search = product.name.to_lowercase().contains(&query);
            let matches_category = category == ALL_CATEGORIES || product.category == category;
            matches_search && matches_category
        })
        .collect()
}
