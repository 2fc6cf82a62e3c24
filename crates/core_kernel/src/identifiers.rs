//! Strongly-typed identifiers for domain entities
//!
//! Play identifiers are human-chosen keys ("hamlet", "as-like") rather than
//! generated UUIDs, so the newtype wraps a string.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Key of a play in a play table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayId(String);

impl PlayId {
    /// Creates an identifier from any string-like key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PlayId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() {
            return Err(CoreError::validation("Play id must not be empty"));
        }
        Ok(Self(key.to_string()))
    }
}

impl From<&str> for PlayId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for PlayId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for PlayId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
