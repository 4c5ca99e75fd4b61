//! DigiVault Storefront core.
//!
//! This crate holds everything behind the rendering surface of the DigiVault
//! digital-goods store:
//!
//! - [`catalog`] - The product/category inventory, persisted as JSON blobs
//! - [`cart`] - The in-memory shopping cart (product snapshots)
//! - [`checkout`] - The cart drawer state machine and Telegram handoff
//! - [`auth`] - The admin access gate (placeholder credentials, memory-only)
//! - [`admin`] - Gate-checked catalog mutations for the admin surface
//! - [`search`] - Name/category filtering for the public browse view
//! - [`storage`] - The local key-value storage layer
//! - [`state`] - The composition root owning all stores
//!
//! Everything is single-threaded and synchronous: there is exactly one
//! writer by construction, so no locking appears anywhere in this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod search;
pub mod seed;
pub mod state;
pub mod storage;
