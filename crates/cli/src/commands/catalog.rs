//! Catalog browsing and reseeding.
//!
//! # Usage
//!
//! ```bash
//! dv-cli catalog list
//! dv-cli catalog list --search premium --category Streaming
//! dv-cli catalog categories
//! dv-cli catalog seed
//! ```

use digivault_core::display_price;
use digivault_storefront::search::filter_products;
use tracing::info;

use super::load_app;

/// Print the catalog, filtered by search query and category.
pub fn list(search: &str, category: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = load_app()?;
    let hits = filter_products(app.catalog.products(), search, category);

    if hits.is_empty() {
        println!("No results for \"{search}\" in {category}.");
        return Ok(());
    }

    for product in hits {
        let stock = if product.in_stock {
            ""
        } else {
            "  [OUT OF STOCK]"
        };
        println!(
            "{}  {}  {} ({}){stock}",
            product.id,
            display_price(product.price),
            product.name,
            product.category,
        );
    }
    Ok(())
}

/// Print the category list.
pub fn categories() -> Result<(), Box<dyn std::error::Error>> {
    let app = load_app()?;
    for category in app.catalog.categories() {
        println!("{category}");
    }
    Ok(())
}

/// Overwrite persisted storage with the built-in seed catalog.
pub fn seed() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = load_app()?;
    app.catalog.reset_to_seed();

    info!(dir = %app.config().data_dir.display(), "storage reset to seed catalog");
    println!(
        "Seeded {} products into {}",
        app.catalog.products().len(),
        app.config().data_dir.display()
    );
    Ok(())
}
