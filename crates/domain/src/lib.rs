pub mod common;

pub mod aggregates;
pub mod draft;
pub mod error;
pub mod events;
pub mod ids;
pub mod search;
pub mod value_objects;

pub use aggregates::{Character, CharacterProfile};
pub use draft::{CharacterDraft, RelationshipDraft};
pub use error::DomainError;
pub use events::{CharacterUpdate, DomainEvent};
pub use ids::CharacterId;
pub use search::{filter_characters, matches_query, normalize_query, SEARCHABLE_FIELDS};
pub use value_objects::{
    placeholder_avatar, random_placeholder_avatar, CharacterField, CharacterName, Relationship,
    PLACEHOLDER_AVATAR_PREFIX, RANDOM_AVATAR_SIGNATURES,
};
