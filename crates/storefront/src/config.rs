//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the store runs with built-in defaults.
//!
//! - `DIGIVAULT_DATA_DIR` - Directory for the persisted catalog blobs
//!   (default: `data`)
//! - `DIGIVAULT_BOT_HANDLE` - Telegram bot handle orders are sent to
//!   (default: `messagebotkhbot`)
//! - `DIGIVAULT_ADMIN_EMAIL` / `DIGIVAULT_ADMIN_PASSWORD` - The admin
//!   credential pair. Defaults to the built-in placeholder pair; either way
//!   this is a literal comparison, not a security mechanism.

use std::env;
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use crate::auth::{DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD};
use crate::checkout::DEFAULT_BOT_HANDLE;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Store application configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the persisted catalog (`products.json`,
    /// `categories.json`).
    pub data_dir: PathBuf,
    /// Telegram bot handle for the checkout handoff.
    pub bot_handle: String,
    /// Admin login email.
    pub admin_email: String,
    /// Admin login password. `SecretString` keeps it out of debug output;
    /// the gate itself is still a placeholder literal comparison.
    pub admin_password: SecretString,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            bot_handle: DEFAULT_BOT_HANDLE.to_owned(),
            admin_email: DEFAULT_ADMIN_EMAIL.to_owned(),
            admin_password: SecretString::from(DEFAULT_ADMIN_PASSWORD.to_owned()),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value
    /// (blank data dir, malformed bot handle).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(dir) = env::var("DIGIVAULT_DATA_DIR") {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidEnvVar(
                    "DIGIVAULT_DATA_DIR".to_owned(),
                    "must not be blank".to_owned(),
                ));
            }
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(handle) = env::var("DIGIVAULT_BOT_HANDLE") {
            let trimmed = handle.trim().trim_start_matches('@');
            if trimmed.is_empty()
                || !trimmed
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                return Err(ConfigError::InvalidEnvVar(
                    "DIGIVAULT_BOT_HANDLE".to_owned(),
                    "must be a Telegram handle (letters, digits, underscores)".to_owned(),
                ));
            }
            config.bot_handle = trimmed.to_owned();
        }

        if let Ok(email) = env::var("DIGIVAULT_ADMIN_EMAIL") {
            config.admin_email = email;
        }
        if let Ok(password) = env::var("DIGIVAULT_ADMIN_PASSWORD") {
            config.admin_password = SecretString::from(password);
        }

        Ok(config)
    }
}
