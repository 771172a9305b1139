//! Type definitions for Spaces

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Space
///
/// Uniqueness across the system is the persistence layer's concern; this
/// type only carries the value it was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(String);

impl SpaceId {
    /// Wrap an externally assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        SpaceId(id.into())
    }

    /// Create a new random SpaceId
    pub fn generate() -> Self {
        SpaceId(uuid::Uuid::new_v4().to_string())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(id: &str) -> Self {
        SpaceId::new(id)
    }
}
