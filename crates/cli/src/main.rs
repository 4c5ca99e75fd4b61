//! DigiVault CLI - Terminal surface for the store.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! dv-cli catalog list --search netflix --category Streaming
//! dv-cli catalog categories
//!
//! # Reset storage to the built-in seed catalog
//! dv-cli catalog seed
//!
//! # Admin mutations (each invocation is one gate session)
//! dv-cli admin -e hangzin2@gmail.com -p Chicken99 add-category Gaming
//! dv-cli admin -e hangzin2@gmail.com -p Chicken99 delete-product <ID> --yes
//!
//! # Run a checkout and print the Telegram order link
//! dv-cli order --name "John Doe" --email john@example.com \
//!     --phone "+855 12 345 678" --product 3 --product 1
//! ```
//!
//! # Commands
//!
//! - `catalog` - Browse products and categories, reseed storage
//! - `admin` - Gate-checked inventory mutations
//! - `order` - Full cart -> details -> handoff checkout run

#![cfg_attr(not(test), forbid(unsafe_code))]
// A CLI talks to its user on stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dv-cli")]
#[command(author, version, about = "DigiVault store CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Admin inventory mutations (requires the admin credential pair)
    Admin {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,

        #[command(subcommand)]
        action: AdminAction,
    },
    /// Build a cart and run the checkout handoff
    Order(commands::order::OrderArgs),
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products, optionally filtered
    List {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Category filter ("All" matches everything)
        #[arg(short, long, default_value = "All")]
        category: String,
    },
    /// List category names
    Categories,
    /// Reset persisted storage to the built-in seed catalog
    Seed,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Add a product
    AddProduct(commands::admin::AddProductArgs),
    /// Patch fields on an existing product
    UpdateProduct(commands::admin::UpdateProductArgs),
    /// Delete a product (asks for confirmation unless --yes)
    DeleteProduct {
        /// Product id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Add a category
    AddCategory {
        /// Category name
        name: String,
    },
    /// Delete a category (products keep the name)
    DeleteCategory {
        /// Category name
        name: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List { search, category } => {
                commands::catalog::list(&search, &category)?;
            }
            CatalogAction::Categories => commands::catalog::categories()?,
            CatalogAction::Seed => commands::catalog::seed()?,
        },
        Commands::Admin {
            email,
            password,
            action,
        } => {
            let mut session = commands::admin::Session::open(&email, &password)?;
            match action {
                AdminAction::AddProduct(args) => session.add_product(args)?,
                AdminAction::UpdateProduct(args) => session.update_product(args)?,
                AdminAction::DeleteProduct { id, yes } => session.delete_product(&id, yes)?,
                AdminAction::AddCategory { name } => session.add_category(&name)?,
                AdminAction::DeleteCategory { name } => session.delete_category(&name)?,
            }
        }
        Commands::Order(args) => commands::order::run(args)?,
    }
    Ok(())
}
