//! Composition root owning every store.
//!
//! The stores are constructed exactly once, at process start, and handed to
//! surfaces by reference. No globals, no ambient lookup: anything that needs
//! a store receives it explicitly.

use crate::auth::AccessGate;
use crate::cart::CartStore;
use crate::catalog::CatalogStore;
use crate::checkout::Checkout;
use crate::config::StoreConfig;
use crate::storage::{FileStorage, MemoryStorage, StorageBackend};

/// The assembled application: one catalog, one cart, one checkout flow, one
/// access gate. Single-threaded; the owner is the only writer.
pub struct App {
    config: StoreConfig,
    pub catalog: CatalogStore,
    pub cart: CartStore,
    pub checkout: Checkout,
    pub gate: AccessGate,
}

impl App {
    /// Build the application with file-backed storage from the config's
    /// data directory.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        let storage = FileStorage::new(config.data_dir.clone());
        Self::with_storage(config, Box::new(storage))
    }

    /// Build the application with in-memory storage (tests, ephemeral runs).
    #[must_use]
    pub fn ephemeral(config: StoreConfig) -> Self {
        Self::with_storage(config, Box::new(MemoryStorage::new()))
    }

    /// Build the application over an explicit storage backend.
    #[must_use]
    pub fn with_storage(config: StoreConfig, storage: Box<dyn StorageBackend>) -> Self {
        let catalog = CatalogStore::load(storage);
        let checkout = Checkout::new(&config.bot_handle);
        let gate = AccessGate::new(config.admin_email.clone(), config.admin_password.clone());
        Self {
            config,
            catalog,
            cart: CartStore::new(),
            checkout,
            gate,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Open the gate-checked admin surface over the catalog.
    pub fn admin(&mut self) -> crate::admin::AdminSurface<'_> {
        crate::admin::AdminSurface::new(&self.gate, &mut self.catalog)
    }
}
