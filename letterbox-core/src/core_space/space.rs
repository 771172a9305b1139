//! Space data structure

use super::types::SpaceId;
use serde::{Deserialize, Serialize};

/// A Space is a named topic under which profiles exist
///
/// Spaces are plain values: once built they are shared behind an `Arc`
/// by every profile scoped to them and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    /// Unique identifier
    pub id: SpaceId,

    /// Human-readable name
    pub name: String,
}

impl Space {
    /// Create a new Space
    pub fn new(id: SpaceId, name: impl Into<String>) -> Self {
        Space {
            id,
            name: name.into(),
        }
    }
}
