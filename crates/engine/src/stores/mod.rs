//! In-memory stores owned by a catalog session.

mod character_store;

pub use character_store::CharacterStore;

use heroshelf_domain::{CharacterId, DomainError};

/// Shared error type for collection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Character not found: {0}")]
    NotFound(CharacterId),
    #[error("Editing characters is not available")]
    EditingUnavailable,
    #[error("Could not allocate a unique character id after {attempts} attempts")]
    IdExhausted { attempts: usize },
    #[error(transparent)]
    Domain(DomainError),
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => CatalogError::Validation(msg),
            other => CatalogError::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_validation_failures_become_validation_errors() {
        assert_eq!(
            CatalogError::from(DomainError::validation("Character name cannot be empty")),
            CatalogError::Validation("Character name cannot be empty".to_string())
        );

        let err = CatalogError::from(DomainError::parse("Unknown character field: height"));
        assert!(matches!(err, CatalogError::Domain(DomainError::Parse(_))));
        assert_eq!(err.to_string(), "Parse error: Unknown character field: height");
    }
}
