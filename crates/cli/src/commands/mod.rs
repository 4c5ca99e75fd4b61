//! CLI command implementations.

pub mod admin;
pub mod catalog;
pub mod order;

use digivault_storefront::config::StoreConfig;
use digivault_storefront::state::App;

/// Build the application from the environment, file-backed.
pub fn load_app() -> Result<App, Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;
    Ok(App::new(config))
}
