//! Identifier type for budget items
//!
//! New items get a UUID v4, but identifiers are opaque strings so that
//! documents produced elsewhere (with ids of any shape) survive an import.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "itm-";

/// Opaque, stable identifier of a budget item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier string
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short form used in listings (first 8 characters)
    pub fn short(&self) -> String {
        let head: String = self.0.chars().take(8).collect();
        format!("{}{}", DISPLAY_PREFIX, head)
    }

    /// Check whether user input refers to this ID
    ///
    /// Accepts the full ID, or a prefix of at least 4 characters with or
    /// without the display prefix.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if input == self.0 {
            return true;
        }
        let stripped = input.strip_prefix(DISPLAY_PREFIX).unwrap_or(input);
        stripped.chars().count() >= 4 && self.0.starts_with(stripped)
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short())
    }
}
