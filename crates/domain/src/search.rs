//! Character search
//!
//! Case-insensitive substring matching over a fixed set of short fields.
//! Results keep the order of the input; there is no ranking.

use crate::aggregates::Character;
use crate::value_objects::CharacterField;

/// Fields consulted by [`filter_characters`]
pub const SEARCHABLE_FIELDS: [CharacterField; 4] = [
    CharacterField::Name,
    CharacterField::Race,
    CharacterField::Class,
    CharacterField::Universe,
];

/// Normalize a raw query into the lowercase needle used for matching.
///
/// Returns `None` for an empty or whitespace-only query.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether any searchable field of `character` contains `needle`.
///
/// `needle` must already be normalized (see [`normalize_query`]).
pub fn matches_query(character: &Character, needle: &str) -> bool {
    SEARCHABLE_FIELDS.iter().any(|field| {
        character
            .field(*field)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Filter `characters` down to those matching `query`.
///
/// An empty or whitespace-only query keeps every character.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use heroshelf_domain::{filter_characters, Character, CharacterDraft, CharacterField, CharacterId};
///
/// let profile = CharacterDraft::named("Aria")
///     .with_field(CharacterField::Race, "Elf")
///     .validate()
///     .unwrap();
/// let characters = vec![Character::new(CharacterId::new(), profile, Utc::now())];
///
/// assert_eq!(filter_characters(&characters, "ELF").len(), 1);
/// assert!(filter_characters(&characters, "dwarf").is_empty());
/// ```
pub fn filter_characters<'a>(characters: &'a [Character], query: &str) -> Vec<&'a Character> {
    match normalize_query(query) {
        None => characters.iter().collect(),
        Some(needle) => characters
            .iter()
            .filter(|character| matches_query(character, &needle))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::CharacterDraft;
    use crate::ids::CharacterId;
    use chrono::Utc;

    fn character(name: &str, fields: &[(CharacterField, &str)]) -> Character {
        let draft = fields
            .iter()
            .fold(CharacterDraft::named(name), |draft, (field, value)| {
                draft.with_field(*field, *value)
            });
        Character::new(CharacterId::new(), draft.validate().unwrap(), Utc::now())
    }

    fn roster() -> Vec<Character> {
        vec![
            character(
                "Aria",
                &[
                    (CharacterField::Race, "Elf"),
                    (CharacterField::Class, "Mage"),
                ],
            ),
            character(
                "Thorin",
                &[
                    (CharacterField::Race, "Dwarf"),
                    (CharacterField::Universe, "Middle-earth"),
                ],
            ),
            character(
                "Geralt",
                &[
                    (CharacterField::Class, "Witcher"),
                    (CharacterField::Backstory, "Raised by elves"),
                ],
            ),
        ]
    }

    fn names(found: &[&Character]) -> Vec<String> {
        found.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let characters = roster();
        for query in ["", "   ", "\t\n"] {
            let found = filter_characters(&characters, query);
            assert_eq!(found.len(), characters.len());
            assert!(found.iter().zip(&characters).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn matching_ignores_case() {
        let characters = roster();
        assert_eq!(
            filter_characters(&characters, "ELF"),
            filter_characters(&characters, "elf")
        );
        assert_eq!(names(&filter_characters(&characters, "eLf")), ["Aria"]);
    }

    #[test]
    fn query_is_trimmed() {
        let characters = roster();
        assert_eq!(names(&filter_characters(&characters, "  dwarf ")), ["Thorin"]);
    }

    #[test]
    fn matches_substrings_of_each_searchable_field() {
        let characters = roster();
        assert_eq!(names(&filter_characters(&characters, "tho")), ["Thorin"]);
        assert_eq!(names(&filter_characters(&characters, "witch")), ["Geralt"]);
        assert_eq!(names(&filter_characters(&characters, "middle")), ["Thorin"]);
    }

    #[test]
    fn free_text_fields_are_not_searched() {
        let characters = roster();
        // "elves" only appears in a backstory
        assert!(filter_characters(&characters, "elves").is_empty());
    }

    #[test]
    fn results_keep_input_order() {
        let characters = roster();
        // "r" appears in Aria, Thorin and Geralt
        assert_eq!(
            names(&filter_characters(&characters, "r")),
            ["Aria", "Thorin", "Geralt"]
        );
    }

    #[test]
    fn case_folding_handles_non_ascii() {
        let characters = vec![character("Ёжик", &[(CharacterField::Race, "Ёж")])];
        assert_eq!(filter_characters(&characters, "ёж").len(), 1);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_characters(&roster(), "dragon").is_empty());
    }
}
