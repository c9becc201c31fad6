//! Character drafts - uncommitted character data
//!
//! A draft mirrors the editable attributes of a [`Character`] as plain
//! strings, where the empty string means "not provided". Drafts are never
//! stored; they are validated into a [`CharacterProfile`] when committed.

use serde::{Deserialize, Serialize};

use crate::aggregates::{Character, CharacterProfile};
use crate::common::StringExt;
use crate::error::DomainError;
use crate::value_objects::{CharacterField, CharacterName, Relationship};

/// An in-progress character record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterDraft {
    pub name: String,
    pub avatar: String,
    pub race: String,
    pub class: String,
    pub universe: String,
    pub backstory: String,
    pub appearance: String,
    pub personality: String,
    pub notes: String,
    pub abilities: Vec<String>,
    pub relationships: Vec<Relationship>,
}

impl CharacterDraft {
    /// Create an empty draft with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_field(mut self, field: CharacterField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push(ability.into());
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    /// Returns the raw value of a scalar field.
    pub fn field(&self, field: CharacterField) -> &str {
        match field {
            CharacterField::Name => &self.name,
            CharacterField::Avatar => &self.avatar,
            CharacterField::Race => &self.race,
            CharacterField::Class => &self.class,
            CharacterField::Universe => &self.universe,
            CharacterField::Backstory => &self.backstory,
            CharacterField::Appearance => &self.appearance,
            CharacterField::Personality => &self.personality,
            CharacterField::Notes => &self.notes,
        }
    }

    /// Overwrite one scalar field.
    pub fn set_field(&mut self, field: CharacterField, value: impl Into<String>) {
        let slot = match field {
            CharacterField::Name => &mut self.name,
            CharacterField::Avatar => &mut self.avatar,
            CharacterField::Race => &mut self.race,
            CharacterField::Class => &mut self.class,
            CharacterField::Universe => &mut self.universe,
            CharacterField::Backstory => &mut self.backstory,
            CharacterField::Appearance => &mut self.appearance,
            CharacterField::Personality => &mut self.personality,
            CharacterField::Notes => &mut self.notes,
        };
        *slot = value.into();
    }

    /// A draft can be committed once its name has visible content.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Validate the draft into the attribute set of a committed character.
    ///
    /// Only the name is required. Empty optional fields become `None`;
    /// abilities and relationships are carried over as they are.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the name is empty after
    /// trimming or too long.
    pub fn validate(&self) -> Result<CharacterProfile, DomainError> {
        let name = CharacterName::new(self.name.as_str())?;
        Ok(CharacterProfile {
            name,
            avatar: self.avatar.clone().into_option(),
            race: self.race.clone().into_option(),
            class: self.class.clone().into_option(),
            universe: self.universe.clone().into_option(),
            backstory: self.backstory.clone().into_option(),
            appearance: self.appearance.clone().into_option(),
            personality: self.personality.clone().into_option(),
            notes: self.notes.clone().into_option(),
            abilities: self.abilities.clone(),
            relationships: self.relationships.clone(),
        })
    }
}

impl From<&Character> for CharacterDraft {
    fn from(character: &Character) -> Self {
        let mut draft = CharacterDraft::named(character.name().as_str());
        for field in CharacterField::ALL {
            if field == CharacterField::Name {
                continue;
            }
            if let Some(value) = character.field(field) {
                draft.set_field(field, value);
            }
        }
        draft.abilities = character.abilities().to_vec();
        draft.relationships = character.relationships().to_vec();
        draft
    }
}

/// Staged input for a relationship that has not been added yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDraft {
    pub name: String,
    pub relationship: String,
}

impl RelationshipDraft {
    pub fn new(name: impl Into<String>, relationship: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            relationship: relationship.into(),
        }
    }

    /// The relationship this input would add, if both sides have content.
    pub fn to_relationship(&self) -> Option<Relationship> {
        Relationship::from_input(&self.name, &self.relationship)
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.relationship.is_empty()
    }
}
