//! Scalar character fields addressable by name

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One scalar field of a character or draft.
///
/// Abilities and relationships are list-valued and have their own
/// operations, so they are not listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterField {
    Name,
    Avatar,
    Race,
    Class,
    Universe,
    Backstory,
    Appearance,
    Personality,
    Notes,
}

impl CharacterField {
    pub const ALL: [CharacterField; 9] = [
        CharacterField::Name,
        CharacterField::Avatar,
        CharacterField::Race,
        CharacterField::Class,
        CharacterField::Universe,
        CharacterField::Backstory,
        CharacterField::Appearance,
        CharacterField::Personality,
        CharacterField::Notes,
    ];

    /// The form field name for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterField::Name => "name",
            CharacterField::Avatar => "avatar",
            CharacterField::Race => "race",
            CharacterField::Class => "class",
            CharacterField::Universe => "universe",
            CharacterField::Backstory => "backstory",
            CharacterField::Appearance => "appearance",
            CharacterField::Personality => "personality",
            CharacterField::Notes => "notes",
        }
    }
}

impl fmt::Display for CharacterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CharacterField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::parse(format!("Unknown character field: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_field_name() {
        for field in CharacterField::ALL {
            assert_eq!(field.as_str().parse::<CharacterField>().unwrap(), field);
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(
            " Universe ".parse::<CharacterField>().unwrap(),
            CharacterField::Universe
        );
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = "height".parse::<CharacterField>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }
}
