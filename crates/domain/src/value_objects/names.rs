//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated character name (non-empty, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let name = CharacterName::new("  Aria  ").unwrap();
        assert_eq!(name.as_str(), "Aria");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(CharacterName::new("").is_err());
        assert!(CharacterName::new(" \t\n ").is_err());
    }

    #[test]
    fn long_names_are_accepted() {
        let long = "A".repeat(5_000);
        let name = CharacterName::new(format!("  {}  ", long)).unwrap();
        assert_eq!(name.as_str(), long);
    }

    #[test]
    fn deserialization_validates() {
        let ok: CharacterName = serde_json::from_str("\"Bob\"").unwrap();
        assert_eq!(ok.as_str(), "Bob");
        assert!(serde_json::from_str::<CharacterName>("\"   \"").is_err());
    }
}
