//! DigiVault Core - Shared domain types.
//!
//! This crate provides the common types used across all DigiVault components:
//! - `storefront` - Catalog, cart, checkout, and admin-gate stores
//! - `cli` - The terminal rendering surface
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no link
//! opening. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, product ids, prices, customer info, and identities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
