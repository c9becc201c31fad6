//! Character relationships
//!
//! A relationship is free text on both sides: who the other party is and how
//! they relate to the character ("Bob", "older brother").

use serde::{Deserialize, Serialize};

use crate::common::trimmed_non_empty;

/// A named relationship attached to a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub name: String,
    pub relationship: String,
}

impl Relationship {
    pub fn new(name: impl Into<String>, relationship: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationship: relationship.into(),
        }
    }

    /// Build a relationship from raw input, trimming both sides.
    ///
    /// Returns `None` unless both the name and the relationship are
    /// non-empty after trimming.
    pub fn from_input(name: &str, relationship: &str) -> Option<Self> {
        let name = trimmed_non_empty(name)?;
        let relationship = trimmed_non_empty(relationship)?;
        Some(Self { name, relationship })
    }
}
