//! Value objects - Immutable objects defined by their attributes

mod avatar;
mod character_field;
mod names;
mod relationship;

pub use avatar::{
    placeholder_avatar, random_placeholder_avatar, PLACEHOLDER_AVATAR_PREFIX,
    RANDOM_AVATAR_SIGNATURES,
};
pub use character_field::CharacterField;
pub use names::CharacterName;
pub use relationship::Relationship;
