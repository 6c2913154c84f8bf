//! URL record entity and its key types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Public lookup key of a URL record.
///
/// Aliases are the only key exposed outside the store. They are compared
/// byte-for-byte, so `Abc` and `abc` are different aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alias(String);

impl Alias {
    /// Wraps a string as an alias without validation.
    ///
    /// Shape rules (allowed characters, reserved words) are enforced by the
    /// HTTP layer; the store only guarantees uniqueness.
    pub fn new(alias: impl Into<String>) -> Self {
        Self(alias.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Alias {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Alias {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Row identifier assigned by the store.
///
/// Internal only: it is never accepted as a lookup key. Use [`Alias`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted alias → destination mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: RecordId,
    pub alias: Alias,
    pub destination_url: String,
}

impl UrlRecord {
    pub fn new(id: RecordId, alias: Alias, destination_url: String) -> Self {
        Self {
            id,
            alias,
            destination_url,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub alias: Alias,
    pub destination_url: String,
}

impl NewUrlRecord {
    pub fn new(alias: Alias, destination_url: impl Into<String>) -> Self {
        Self {
            alias,
            destination_url: destination_url.into(),
        }
    }
}
