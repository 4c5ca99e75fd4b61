//! Opaque product identifier.
//!
//! Product ids are opaque strings. Persisted catalogs may contain short
//! legacy ids (`"1"`, `"2"`, ...); freshly generated ids are 128-bit random
//! UUIDs rendered without hyphens. Uniqueness across a catalog is the
//! catalog store's invariant, not this type's.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An opaque, unique product identifier.
///
/// Equality is plain string equality; the store guarantees uniqueness across
/// the catalog, not this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an existing id value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_is_opaque_text() {
        let id = ProductId::generate();
        assert_eq!(id.as_str().len(), 32);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"3\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
