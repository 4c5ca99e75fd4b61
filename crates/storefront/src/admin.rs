//! Gate-checked catalog mutations for the admin surface.
//!
//! Every mutating catalog operation is reachable only through this wrapper,
//! which checks the access gate first. An unauthenticated caller gets
//! [`AdminError::Unauthorized`]; the rendering surface routes that to the
//! login entry point instead of executing the mutation.
//!
//! Destructive-action confirmation (e.g. "really delete this product?") is
//! the surface's job, not this module's.

use digivault_core::{Product, ProductDraft, ProductId, ProductPatch};
use thiserror::Error;

use crate::auth::AccessGate;
use crate::catalog::CatalogStore;

/// Errors from the admin surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    /// No authenticated identity; route to the login entry point.
    #[error("access denied: not authenticated")]
    Unauthorized,
}

/// One admin session over the catalog.
///
/// Borrows the gate read-only and the catalog mutably for the duration of
/// the session, so there is exactly one writer by construction.
pub struct AdminSurface<'a> {
    gate: &'a AccessGate,
    catalog: &'a mut CatalogStore,
}

impl<'a> AdminSurface<'a> {
    #[must_use]
    pub fn new(gate: &'a AccessGate, catalog: &'a mut CatalogStore) -> Self {
        Self { gate, catalog }
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] without an authenticated identity.
    pub fn add_product(&mut self, draft: ProductDraft) -> Result<Product, AdminError> {
        self.ensure_authenticated()?;
        Ok(self.catalog.add_product(draft).clone())
    }

    /// Patch a product; unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] without an authenticated identity.
    pub fn update_product(&mut self, id: &ProductId, patch: ProductPatch) -> Result<(), AdminError> {
        self.ensure_authenticated()?;
        self.catalog.update_product(id, patch);
        Ok(())
    }

    /// Delete a product; unknown ids are a silent no-op.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] without an authenticated identity.
    pub fn delete_product(&mut self, id: &ProductId) -> Result<(), AdminError> {
        self.ensure_authenticated()?;
        self.catalog.delete_product(id);
        Ok(())
    }

    /// Add a category (trimmed; blanks and duplicates are no-ops).
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] without an authenticated identity.
    pub fn add_category(&mut self, name: &str) -> Result<(), AdminError> {
        self.ensure_authenticated()?;
        self.catalog.add_category(name);
        Ok(())
    }

    /// Delete a category. Products referencing it are left untouched.
    ///
    /// # Errors
    ///
    /// [`AdminError::Unauthorized`] without an authenticated identity.
    pub fn delete_category(&mut self, name: &str) -> Result<(), AdminError> {
        self.ensure_authenticated()?;
        self.catalog.delete_category(name);
        Ok(())
    }

    fn ensure_authenticated(&self) -> Result<(), AdminError> {
        if self.gate.current_identity().is_some() {
            Ok(())
        } else {
            Err(AdminError::Unauthorized)
        }
    }
}
