//! Integration tests for DigiVault.
//!
//! Everything here runs in-process: the stores are plain objects, so a test
//! assembles an [`App`](digivault_storefront::state::App), drives it the way
//! a rendering surface would, and asserts on the resulting state.
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart -> details -> handoff -> confirmation
//! - `catalog_persistence` - Storage round-trips and seed fallback
//! - `admin_access` - The gate in front of catalog mutations
//!
//! Run with: cargo test -p digivault-integration-tests

use std::cell::RefCell;

use digivault_storefront::checkout::LinkOpener;
use digivault_storefront::config::StoreConfig;
use digivault_storefront::state::App;
use url::Url;

/// An in-memory app with the seed catalog, as on first run.
#[must_use]
pub fn ephemeral_app() -> App {
    App::ephemeral(StoreConfig::default())
}

/// An in-memory app with an already-authenticated admin session.
#[must_use]
pub fn admin_app() -> App {
    let mut app = ephemeral_app();
    assert!(app.gate.authenticate("hangzin2@gmail.com", "Chicken99"));
    app
}

/// Records opened links instead of launching anything.
#[derive(Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<Url>>,
}

impl RecordingOpener {
    /// All links opened so far, in order.
    #[must_use]
    pub fn opened(&self) -> Vec<Url> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &Url) {
        self.opened.borrow_mut().push(url.clone());
    }
}
