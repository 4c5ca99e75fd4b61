//! Admin inventory commands.
//!
//! Each invocation is one gate session: authenticate with the credential
//! pair, run one mutation, exit. A failed login prints "Access denied." and
//! nothing executes.
//!
//! # Usage
//!
//! ```bash
//! dv-cli admin -e hangzin2@gmail.com -p Chicken99 \
//!     add-product --name "Figma Pro" --category Design --price 5.99
//!
//! dv-cli admin -e hangzin2@gmail.com -p Chicken99 \
//!     update-product <ID> --price 9.99 --in-stock false
//!
//! dv-cli admin -e hangzin2@gmail.com -p Chicken99 delete-product <ID> --yes
//! ```

use std::io::{self, BufRead, Write};

use clap::Args;
use digivault_core::{ProductDraft, ProductId, ProductPatch};
use digivault_storefront::admin::AdminError;
use digivault_storefront::error::StoreError;
use digivault_storefront::state::App;
use rust_decimal::Decimal;

use super::load_app;

/// Arguments for `admin add-product`.
#[derive(Args)]
pub struct AddProductArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Category name (need not exist in the category list)
    #[arg(long)]
    pub category: String,

    /// Price in USD, e.g. 5.99
    #[arg(long)]
    pub price: Decimal,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Description text
    #[arg(long, default_value = "")]
    pub description: String,

    /// Feature bullet point (repeatable)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Mark the product out of stock
    #[arg(long)]
    pub out_of_stock: bool,
}

/// Arguments for `admin update-product`. Only supplied fields change.
#[derive(Args)]
pub struct UpdateProductArgs {
    /// Product id
    pub id: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub price: Option<Decimal>,

    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Replace the whole feature list (repeatable)
    #[arg(long = "feature")]
    pub features: Option<Vec<String>>,

    /// Set stock status
    #[arg(long)]
    pub in_stock: Option<bool>,
}

/// An authenticated admin CLI session.
pub struct Session {
    app: App,
}

impl Session {
    /// Authenticate against the gate; a wrong pair denies the whole session.
    pub fn open(email: &str, password: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let mut app = load_app()?;
        if !app.gate.authenticate(email, password) {
            println!("Access denied.");
            return Err(StoreError::AccessDenied(AdminError::Unauthorized).into());
        }
        Ok(Self { app })
    }

    pub fn add_product(&mut self, args: AddProductArgs) -> Result<(), Box<dyn std::error::Error>> {
        let draft = ProductDraft {
            name: args.name,
            category: args.category,
            price: args.price,
            image: args.image,
            in_stock: !args.out_of_stock,
            description: args.description,
            features: args.features,
        };
        let product = self.app.admin().add_product(draft)?;
        println!("Added {} ({})", product.name, product.id);
        Ok(())
    }

    pub fn update_product(
        &mut self,
        args: UpdateProductArgs,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let id = ProductId::new(args.id);
        if self.app.catalog.product(&id).is_none() {
            println!("No product with id {id}; nothing updated.");
            return Ok(());
        }
        let patch = ProductPatch {
            name: args.name,
            category: args.category,
            price: args.price,
            image: args.image,
            in_stock: args.in_stock,
            description: args.description,
            features: args.features,
            rating: None,
            reviews: None,
        };
        self.app.admin().update_product(&id, patch)?;
        println!("Updated {id}");
        Ok(())
    }

    /// Delete a product, prompting for confirmation unless `yes`.
    ///
    /// Confirmation lives here because the core performs none: deletes at
    /// the store level are unconditional.
    pub fn delete_product(&mut self, id: &str, yes: bool) -> Result<(), Box<dyn std::error::Error>> {
        let id = ProductId::new(id);
        let Some(product) = self.app.catalog.product(&id) else {
            println!("No product with id {id}; nothing deleted.");
            return Ok(());
        };

        if !yes && !confirm(&format!("Delete \"{}\"?", product.name))? {
            println!("Aborted.");
            return Ok(());
        }

        self.app.admin().delete_product(&id)?;
        println!("Deleted {id}");
        Ok(())
    }

    pub fn add_category(&mut self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.app.admin().add_category(name)?;
        println!("Categories: {}", self.app.catalog.categories().join(", "));
        Ok(())
    }

    pub fn delete_category(&mut self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.app.admin().delete_category(name)?;
        println!("Categories: {}", self.app.catalog.categories().join(", "));
        println!("Note: products in \"{name}\" keep their category name.");
        Ok(())
    }
}

/// Ask a yes/no question on the terminal; default is no.
fn confirm(question: &str) -> Result<bool, io::Error> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
