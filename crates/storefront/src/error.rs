//! Unified error handling for surfaces built on the store.
//!
//! The stores themselves never fail fatally (storage problems degrade to
//! seed data or a logged write failure); this type exists for surfaces such
//! as the CLI, where config problems, denied admin actions, and bad lookups
//! need one error channel.

use thiserror::Error;

use crate::admin::AdminError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for store surfaces.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend failed outright.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Admin action denied by the access gate.
    #[error("{0}")]
    AccessDenied(#[from] AdminError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
