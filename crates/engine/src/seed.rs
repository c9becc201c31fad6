//! Bundled sample collection.
//!
//! The catalog starts with a few example characters so a fresh session is
//! not empty. They live in `data/sample_characters.json` as drafts.

use heroshelf_domain::CharacterDraft;

use crate::stores::{CatalogError, CharacterStore};

const SAMPLE_CHARACTERS: &str = include_str!("../data/sample_characters.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Sample characters are malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Sample characters were rejected: {0}")]
    Catalog(#[from] CatalogError),
}

/// The sample drafts, in display order.
pub fn sample_drafts() -> Result<Vec<CharacterDraft>, SeedError> {
    Ok(serde_json::from_str(SAMPLE_CHARACTERS)?)
}

/// Load the sample drafts into `store`, returning how many were added.
pub fn seed_samples(store: &mut CharacterStore) -> Result<usize, SeedError> {
    let drafts = sample_drafts()?;
    Ok(store.seed(&drafts)?)
}
