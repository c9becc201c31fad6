//! Character aggregate - a record in the personal collection
//!
//! # Design
//!
//! - **Private identity**: `id` and `created_at` are fixed at construction
//! - **Profile**: every editable attribute lives in [`CharacterProfile`],
//!   which is only produced by validating a draft
//! - **Outcomes**: [`Character::replace_profile`] reports what changed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::events::CharacterUpdate;
use crate::ids::CharacterId;
use crate::value_objects::{placeholder_avatar, CharacterField, CharacterName, Relationship};

/// The validated, editable attributes of a character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub name: CharacterName,
    pub avatar: Option<String>,
    pub race: Option<String>,
    pub class: Option<String>,
    pub universe: Option<String>,
    pub backstory: Option<String>,
    pub appearance: Option<String>,
    pub personality: Option<String>,
    pub notes: Option<String>,
    pub abilities: Vec<String>,
    pub relationships: Vec<Relationship>,
}

impl CharacterProfile {
    /// A profile with only a name set.
    pub fn new(name: CharacterName) -> Self {
        Self {
            name,
            avatar: None,
            race: None,
            class: None,
            universe: None,
            backstory: None,
            appearance: None,
            personality: None,
            notes: None,
            abilities: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Returns the value of a scalar field, `None` when absent.
    pub fn field(&self, field: CharacterField) -> Option<&str> {
        match field {
            CharacterField::Name => Some(self.name.as_str()),
            CharacterField::Avatar => self.avatar.as_deref(),
            CharacterField::Race => self.race.as_deref(),
            CharacterField::Class => self.class.as_deref(),
            CharacterField::Universe => self.universe.as_deref(),
            CharacterField::Backstory => self.backstory.as_deref(),
            CharacterField::Appearance => self.appearance.as_deref(),
            CharacterField::Personality => self.personality.as_deref(),
            CharacterField::Notes => self.notes.as_deref(),
        }
    }
}

/// A committed character
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `name` is always non-empty (enforced by `CharacterName`)
/// - `created_at <= updated_at`
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use heroshelf_domain::{Character, CharacterDraft, CharacterId};
///
/// let profile = CharacterDraft::named("Aria").validate().unwrap();
/// let character = Character::new(CharacterId::new(), profile, Utc::now());
///
/// assert_eq!(character.name().as_str(), "Aria");
/// assert_eq!(character.created_at(), character.updated_at());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    #[serde(flatten)]
    profile: CharacterProfile,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a character with both timestamps set to `now`.
    pub fn new(id: CharacterId, profile: CharacterProfile, now: DateTime<Utc>) -> Self {
        Self {
            id,
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Identity Accessors (read-only)
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.profile.name
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Profile Accessors
    // =========================================================================

    #[inline]
    pub fn profile(&self) -> &CharacterProfile {
        &self.profile
    }

    /// Returns the explicit avatar reference, if one was provided.
    #[inline]
    pub fn avatar(&self) -> Option<&str> {
        self.profile.avatar.as_deref()
    }

    /// Returns the avatar to display: the explicit one, or the placeholder
    /// derived from this character's id.
    pub fn avatar_or_placeholder(&self) -> String {
        match self.avatar() {
            Some(avatar) => avatar.to_string(),
            None => placeholder_avatar(self.id),
        }
    }

    #[inline]
    pub fn race(&self) -> Option<&str> {
        self.profile.race.as_deref()
    }

    #[inline]
    pub fn class(&self) -> Option<&str> {
        self.profile.class.as_deref()
    }

    #[inline]
    pub fn universe(&self) -> Option<&str> {
        self.profile.universe.as_deref()
    }

    #[inline]
    pub fn backstory(&self) -> Option<&str> {
        self.profile.backstory.as_deref()
    }

    #[inline]
    pub fn appearance(&self) -> Option<&str> {
        self.profile.appearance.as_deref()
    }

    #[inline]
    pub fn personality(&self) -> Option<&str> {
        self.profile.personality.as_deref()
    }

    #[inline]
    pub fn notes(&self) -> Option<&str> {
        self.profile.notes.as_deref()
    }

    #[inline]
    pub fn abilities(&self) -> &[String] {
        &self.profile.abilities
    }

    #[inline]
    pub fn relationships(&self) -> &[Relationship] {
        &self.profile.relationships
    }

    /// Returns the value of a scalar field, `None` when absent.
    pub fn field(&self, field: CharacterField) -> Option<&str> {
        self.profile.field(field)
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Replace every editable attribute and stamp `updated_at`.
    ///
    /// Identity and `created_at` are untouched. Returns one entry per
    /// attribute whose value actually changed; `updated_at` moves even when
    /// nothing did.
    pub fn replace_profile(
        &mut self,
        profile: CharacterProfile,
        now: DateTime<Utc>,
    ) -> Vec<CharacterUpdate> {
        let mut changes = Vec::new();
        let old = std::mem::replace(&mut self.profile, profile);

        if old.name != self.profile.name {
            changes.push(CharacterUpdate::NameChanged {
                from: old.name.clone(),
                to: self.profile.name.clone(),
            });
        }
        if old.avatar != self.profile.avatar {
            changes.push(CharacterUpdate::AvatarChanged {
                from: old.avatar.clone(),
                to: self.profile.avatar.clone(),
            });
        }
        for field in CharacterField::ALL {
            if matches!(field, CharacterField::Name | CharacterField::Avatar) {
                continue;
            }
            if old.field(field) != self.profile.field(field) {
                changes.push(CharacterUpdate::FieldChanged { field });
            }
        }
        if old.abilities != self.profile.abilities {
            changes.push(CharacterUpdate::AbilitiesChanged {
                count: self.profile.abilities.len(),
            });
        }
        if old.relationships != self.profile.relationships {
            changes.push(CharacterUpdate::RelationshipsChanged {
                count: self.profile.relationships.len(),
            });
        }

        // Clocks may step backwards; never let updated_at precede created_at
        self.updated_at = now.max(self.created_at);
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::CharacterDraft;
    use chrono::{Duration, TimeZone};

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn aria() -> Character {
        let profile = CharacterDraft::named("Aria")
            .with_field(CharacterField::Race, "Elf")
            .with_ability("Fireball")
            .validate()
            .unwrap();
        Character::new(CharacterId::new(), profile, created_at())
    }

    #[test]
    fn new_character_has_equal_timestamps() {
        let character = aria();
        assert_eq!(character.created_at(), character.updated_at());
        assert_eq!(character.race(), Some("Elf"));
        assert_eq!(character.abilities(), ["Fireball".to_string()]);
    }

    #[test]
    fn avatar_falls_back_to_placeholder() {
        let character = aria();
        assert_eq!(character.avatar(), None);
        assert_eq!(
            character.avatar_or_placeholder(),
            placeholder_avatar(character.id())
        );
    }

    #[test]
    fn explicit_avatar_wins() {
        let profile = CharacterDraft::named("Aria")
            .with_field(CharacterField::Avatar, "https://img.example/aria.png")
            .validate()
            .unwrap();
        let character = Character::new(CharacterId::new(), profile, created_at());
        assert_eq!(
            character.avatar_or_placeholder(),
            "https://img.example/aria.png"
        );
    }

    #[test]
    fn replace_profile_preserves_identity_and_reports_changes() {
        let mut character = aria();
        let id = character.id();
        let later = created_at() + Duration::minutes(5);

        let profile = CharacterDraft::named("Aria Starfall")
            .with_field(CharacterField::Class, "Mage")
            .with_ability("Fireball")
            .validate()
            .unwrap();
        let changes = character.replace_profile(profile, later);

        assert_eq!(character.id(), id);
        assert_eq!(character.created_at(), created_at());
        assert_eq!(character.updated_at(), later);
        assert_eq!(character.race(), None);
        assert!(changes.iter().any(|c| matches!(c, CharacterUpdate::NameChanged { .. })));
        assert!(changes.contains(&CharacterUpdate::FieldChanged {
            field: CharacterField::Race
        }));
        assert!(changes.contains(&CharacterUpdate::FieldChanged {
            field: CharacterField::Class
        }));
        assert!(!changes
            .iter()
            .any(|c| matches!(c, CharacterUpdate::AbilitiesChanged { .. })));
    }

    #[test]
    fn replace_with_same_profile_reports_nothing() {
        let mut character = aria();
        let profile = character.profile().clone();
        let changes = character.replace_profile(profile, created_at() + Duration::seconds(1));
        assert!(changes.is_empty());
        assert!(character.updated_at() > character.created_at());
    }

    #[test]
    fn updated_at_never_precedes_created_at() {
        let mut character = aria();
        let profile = character.profile().clone();
        character.replace_profile(profile, created_at() - Duration::hours(1));
        assert_eq!(character.updated_at(), character.created_at());
    }

    #[test]
    fn serializes_flat_with_camel_case() {
        let character = aria();
        let json = serde_json::to_value(&character).unwrap();
        assert_eq!(json["name"], "Aria");
        assert_eq!(json["race"], "Elf");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("profile").is_none());
    }
}
