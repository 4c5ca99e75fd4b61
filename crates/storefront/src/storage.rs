//! Local key-value storage layer.
//!
//! The catalog persists as two independent string blobs under fixed,
//! well-known keys. The backend is a trait seam so the stores can run
//! against real files or an in-memory map (tests, ephemeral sessions).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage key for the JSON-encoded product list.
pub const PRODUCTS_KEY: &str = "products";
/// Storage key for the JSON-encoded category list.
pub const CATEGORIES_KEY: &str = "categories";

/// Errors from the storage backend.
///
/// Callers in this crate treat these as diagnostics: a failed read falls
/// back to seed data and a failed write is logged, never surfaced.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A string-keyed blob store.
pub trait StorageBackend {
    /// Read the blob stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read at all
    /// (distinct from the key simply being absent).
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the value could not be written durably.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one `<key>.json` file per key under a data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at `dir`. The directory is created
    /// lazily on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this storage writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. to simulate an existing catalog.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }

    /// Peek at a stored blob.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
