//! Character-related mutation outcomes
//!
//! These enums communicate what happened when character state was modified,
//! allowing callers to react appropriately.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CharacterField, CharacterName};

/// One attribute that changed during an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum CharacterUpdate {
    NameChanged {
        from: CharacterName,
        to: CharacterName,
    },
    AvatarChanged {
        from: Option<String>,
        to: Option<String>,
    },
    /// A descriptive text field (race, class, universe, free-text blocks)
    FieldChanged { field: CharacterField },
    AbilitiesChanged { count: usize },
    RelationshipsChanged { count: usize },
}
