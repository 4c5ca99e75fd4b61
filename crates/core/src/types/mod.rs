//! Core types for DigiVault.
//!
//! This module provides the domain vocabulary shared by every component.

pub mod customer;
pub mod id;
pub mod identity;
pub mod price;
pub mod product;

pub use customer::CustomerInfo;
pub use id::ProductId;
pub use identity::{AdminIdentity, Role};
pub use price::{display_price, display_total};
pub use product::{Product, ProductDraft, ProductPatch};
