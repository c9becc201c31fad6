//! Catalog view - what the rendering surface shows.
//!
//! The view owns only the search query. Everything else is derived from the
//! store on demand, so it is always in step with the latest mutation.

use chrono::{DateTime, Utc};
use serde::Serialize;

use heroshelf_domain::{
    filter_characters, normalize_query, Character, CharacterId, Relationship,
};

use crate::stores::CharacterStore;

/// Separator between race, class and universe in a card subtitle
const SUBTITLE_SEPARATOR: &str = " • ";

/// Default backstory excerpt length on a card, in characters
pub const DEFAULT_EXCERPT_CHARS: usize = 160;

/// A character as shown in the catalog grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterCard {
    pub id: CharacterId,
    pub name: String,
    pub avatar: String,
    pub subtitle: Option<String>,
    pub excerpt: Option<String>,
}

impl CharacterCard {
    pub fn from_character(character: &Character, excerpt_chars: usize) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            avatar: character.avatar_or_placeholder(),
            subtitle: subtitle(character),
            excerpt: character
                .backstory()
                .map(|text| excerpt(text, excerpt_chars)),
        }
    }
}

/// Everything about one character, for a detail dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterDetail {
    pub id: CharacterId,
    pub name: String,
    pub avatar: String,
    pub subtitle: Option<String>,
    pub backstory: Option<String>,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub notes: Option<String>,
    pub abilities: Vec<String>,
    pub relationships: Vec<Relationship>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Character> for CharacterDetail {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id(),
            name: character.name().to_string(),
            avatar: character.avatar_or_placeholder(),
            subtitle: subtitle(character),
            backstory: character.backstory().map(str::to_string),
            appearance: character.appearance().map(str::to_string),
            personality: character.personality().map(str::to_string),
            notes: character.notes().map(str::to_string),
            abilities: character.abilities().to_vec(),
            relationships: character.relationships().to_vec(),
            created_at: character.created_at(),
            updated_at: character.updated_at(),
        }
    }
}

/// Message shown in place of an empty grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub description: String,
}

impl EmptyState {
    pub fn no_matches() -> Self {
        Self {
            title: "No characters found".to_string(),
            description: "No characters match your search. Try different search terms."
                .to_string(),
        }
    }

    pub fn no_characters() -> Self {
        Self {
            title: "No characters yet".to_string(),
            description: "You have not created any characters yet. \
                          Start building your collection now!"
                .to_string(),
        }
    }
}

/// One render of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogPage {
    pub query: String,
    pub cards: Vec<CharacterCard>,
    /// Set exactly when `cards` is empty
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    query: String,
    excerpt_chars: usize,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new(DEFAULT_EXCERPT_CHARS)
    }
}

impl CatalogView {
    pub fn new(excerpt_chars: usize) -> Self {
        Self {
            query: String::new(),
            excerpt_chars,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Whether the query narrows the list at all.
    pub fn is_searching(&self) -> bool {
        normalize_query(&self.query).is_some()
    }

    /// Characters matching the current query, in store order.
    pub fn visible<'a>(&self, store: &'a CharacterStore) -> Vec<&'a Character> {
        filter_characters(store.list(), &self.query)
    }

    pub fn page(&self, store: &CharacterStore) -> CatalogPage {
        let cards: Vec<CharacterCard> = self
            .visible(store)
            .into_iter()
            .map(|character| CharacterCard::from_character(character, self.excerpt_chars))
            .collect();

        let empty_state = if !cards.is_empty() {
            None
        } else if self.is_searching() {
            Some(EmptyState::no_matches())
        } else {
            Some(EmptyState::no_characters())
        };

        CatalogPage {
            query: self.query.clone(),
            cards,
            empty_state,
        }
    }
}

/// "Elf • Mage • Middle-earth", skipping absent parts.
fn subtitle(character: &Character) -> Option<String> {
    let parts: Vec<&str> = [character.race(), character.class(), character.universe()]
        .into_iter()
        .flatten()
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SUBTITLE_SEPARATOR))
    }
}

/// Cut `text` to at most `max_chars` characters, marking the cut with "…".
fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
    }
}
