//! Domain Events
//!
//! Coarse-grained events representing changes to the character collection.
//! Observers of the collection receive these after every successful mutation.
//!
//! The `character_events` submodule contains return types from aggregate
//! mutations, communicating what happened when state was modified.

pub mod character_events;

pub use character_events::*;

use serde::{Deserialize, Serialize};

use crate::CharacterId;

/// Domain event for significant state changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DomainEvent {
    CharacterCreated {
        character_id: CharacterId,
        name: String,
    },
    CharacterUpdated {
        character_id: CharacterId,
        name: String,
        changes: Vec<CharacterUpdate>,
    },
    CharacterDeleted {
        character_id: CharacterId,
        name: String,
    },
    /// The collection was bulk-loaded (sample data at startup)
    CollectionSeeded { count: usize },
}

impl DomainEvent {
    /// Stable name of the event, for logs.
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::CharacterCreated { .. } => "character_created",
            DomainEvent::CharacterUpdated { .. } => "character_updated",
            DomainEvent::CharacterDeleted { .. } => "character_deleted",
            DomainEvent::CollectionSeeded { .. } => "collection_seeded",
        }
    }

    /// The character this event is about, if it concerns a single one.
    pub fn character_id(&self) -> Option<CharacterId> {
        match self {
            DomainEvent::CharacterCreated { character_id, .. }
            | DomainEvent::CharacterUpdated { character_id, .. }
            | DomainEvent::CharacterDeleted { character_id, .. } => Some(*character_id),
            DomainEvent::CollectionSeeded { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_id_is_exposed_for_single_character_events() {
        let id = CharacterId::new();
        let event = DomainEvent::CharacterDeleted {
            character_id: id,
            name: "Aria".into(),
        };
        assert_eq!(event.character_id(), Some(id));
        assert_eq!(event.event_type(), "character_deleted");
        assert_eq!(DomainEvent::CollectionSeeded { count: 3 }.character_id(), None);
    }

    #[test]
    fn update_changes_serialize_tagged() {
        let change = CharacterUpdate::AbilitiesChanged { count: 2 };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["type"], "abilitiesChanged");
        assert_eq!(json["count"], 2);
    }
}
