//! Checkout from the terminal.
//!
//! Builds a cart from product ids, walks the checkout state machine, and
//! prints the composed Telegram deep link. Opening the link is left to the
//! user; the cart only exists for this process, so there is nothing to
//! clear afterwards.
//!
//! # Usage
//!
//! ```bash
//! dv-cli order --name "John Doe" --email john@example.com \
//!     --phone "+855 12 345 678" --telegram @johndoe \
//!     --product 3 --product 3 --product 1
//! ```

use clap::Args;
use digivault_core::{ProductId, display_total};
use digivault_storefront::checkout::LinkOpener;
use digivault_storefront::error::StoreError;
use url::Url;

use super::load_app;

/// Arguments for `order`.
#[derive(Args)]
pub struct OrderArgs {
    /// Customer full name
    #[arg(long)]
    pub name: String,

    /// Customer email address
    #[arg(long)]
    pub email: String,

    /// Customer phone number
    #[arg(long)]
    pub phone: String,

    /// Telegram username (optional)
    #[arg(long, default_value = "")]
    pub telegram: String,

    /// Product id to order (repeatable; duplicates order multiple units)
    #[arg(long = "product", required = true)]
    pub products: Vec<String>,
}

/// Prints the deep link instead of opening a browser.
struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &Url) {
        println!("\nOrder link:\n{url}\n");
    }
}

/// Run the full checkout flow for the given products.
pub fn run(args: OrderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = load_app()?;

    for id in &args.products {
        let id = ProductId::new(id.as_str());
        let Some(product) = app.catalog.product(&id) else {
            return Err(StoreError::NotFound(format!("product {id}")).into());
        };
        if !product.in_stock {
            return Err(format!("\"{}\" is out of stock", product.name).into());
        }
        let product = product.clone();
        app.cart.add(&product);
    }

    println!(
        "Cart: {} item(s), total {}",
        app.cart.len(),
        display_total(app.cart.total())
    );

    if !app.checkout.begin_checkout(&app.cart) {
        return Err("cart is empty".into());
    }

    let customer = app.checkout.customer_mut();
    customer.name = args.name;
    customer.email = args.email;
    customer.phone = args.phone;
    customer.telegram = args.telegram;

    if !app.checkout.can_submit() {
        return Err("name, email, and phone must not be blank".into());
    }

    println!(
        "Before sending, make sure you have started the bot: {}",
        app.checkout.bot_url()
    );

    if !app.checkout.submit(&app.cart, &PrintOpener) {
        return Err("checkout submission was not accepted".into());
    }

    println!("If the message did not send, open the same link again to retry.");
    Ok(())
}
