//! Draft builder - form state for creating or editing a character.
//!
//! Holds the draft plus two staging inputs (one ability, one relationship)
//! that are only appended to the draft when committed. The builder never
//! validates the name; that happens when the store commits the draft.

use std::sync::Arc;

use heroshelf_domain::common::{some_if_not_empty, trimmed_non_empty};
use heroshelf_domain::{
    random_placeholder_avatar, Character, CharacterDraft, CharacterField, DomainError,
    Relationship, RelationshipDraft, RANDOM_AVATAR_SIGNATURES,
};

use crate::infrastructure::ports::RandomPort;

pub struct DraftBuilder {
    draft: CharacterDraft,
    preview: Option<String>,
    staged_ability: String,
    staged_relationship: RelationshipDraft,
    random: Arc<dyn RandomPort>,
}

impl DraftBuilder {
    /// An empty builder for a new character.
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self {
            draft: CharacterDraft::default(),
            preview: None,
            staged_ability: String::new(),
            staged_relationship: RelationshipDraft::default(),
            random,
        }
    }

    /// A builder pre-filled from an existing character.
    pub fn for_edit(character: &Character, random: Arc<dyn RandomPort>) -> Self {
        let draft = CharacterDraft::from(character);
        let preview = some_if_not_empty(draft.avatar.clone());
        Self {
            draft,
            preview,
            ..Self::new(random)
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    /// The avatar reference to preview, if any.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn staged_ability(&self) -> &str {
        &self.staged_ability
    }

    pub fn staged_relationship(&self) -> &RelationshipDraft {
        &self.staged_relationship
    }

    pub fn is_submittable(&self) -> bool {
        self.draft.is_submittable()
    }

    // =========================================================================
    // Scalar fields
    // =========================================================================

    pub fn set_field(&mut self, field: CharacterField, value: impl Into<String>) {
        let value = value.into();
        if field == CharacterField::Avatar {
            self.preview = some_if_not_empty(value.clone());
        }
        self.draft.set_field(field, value);
    }

    /// [`set_field`](Self::set_field) addressed by form field name.
    pub fn set_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), DomainError> {
        let field = name.parse::<CharacterField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Assign a random placeholder portrait to the avatar and preview.
    pub fn generate_random_avatar(&mut self) -> &str {
        let signature = self.random.gen_range(0, RANDOM_AVATAR_SIGNATURES - 1);
        let avatar = random_placeholder_avatar(signature);
        tracing::debug!(avatar = %avatar, "Generated random avatar");

        self.preview = Some(avatar.clone());
        self.draft.avatar = avatar;
        &self.draft.avatar
    }

    // =========================================================================
    // Abilities
    // =========================================================================

    pub fn stage_ability(&mut self, text: impl Into<String>) {
        self.staged_ability = text.into();
    }

    /// Append the staged ability if it has visible content.
    ///
    /// Returns whether an ability was added. The staged text is only cleared
    /// when the ability was added.
    pub fn commit_ability(&mut self) -> bool {
        match trimmed_non_empty(&self.staged_ability) {
            Some(ability) => {
                self.draft.abilities.push(ability);
                self.staged_ability.clear();
                true
            }
            None => {
                tracing::debug!("Ignored empty ability");
                false
            }
        }
    }

    /// Remove the ability at `index`; out-of-range indexes are ignored.
    pub fn remove_ability(&mut self, index: usize) -> Option<String> {
        if index < self.draft.abilities.len() {
            Some(self.draft.abilities.remove(index))
        } else {
            tracing::debug!(index, "Ability index out of range");
            None
        }
    }

    // =========================================================================
    // Relationships
    // =========================================================================

    pub fn stage_relationship(
        &mut self,
        name: impl Into<String>,
        relationship: impl Into<String>,
    ) {
        self.staged_relationship = RelationshipDraft::new(name, relationship);
    }

    /// Append the staged relationship if both sides have visible content.
    ///
    /// The staged input is only cleared when the relationship was added.
    pub fn commit_relationship(&mut self) -> bool {
        match self.staged_relationship.to_relationship() {
            Some(relationship) => {
                self.draft.relationships.push(relationship);
                self.staged_relationship = RelationshipDraft::default();
                true
            }
            None => {
                tracing::debug!("Ignored incomplete relationship");
                false
            }
        }
    }

    /// Remove the relationship at `index`; out-of-range indexes are ignored.
    pub fn remove_relationship(&mut self, index: usize) -> Option<Relationship> {
        if index < self.draft.relationships.len() {
            Some(self.draft.relationships.remove(index))
        } else {
            tracing::debug!(index, "Relationship index out of range");
            None
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// The current draft, for handing to the store.
    pub fn submit(&self) -> CharacterDraft {
        self.draft.clone()
    }

    /// Back to an empty form.
    pub fn reset(&mut self) {
        self.draft = CharacterDraft::default();
        self.preview = None;
        self.staged_ability.clear();
        self.staged_relationship = RelationshipDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedRandom, SequentialRandom};
    use chrono::Utc;
    use heroshelf_domain::CharacterId;

    fn builder() -> DraftBuilder {
        DraftBuilder::new(Arc::new(SequentialRandom::new(7)))
    }

    #[test]
    fn starts_empty() {
        let builder = builder();
        assert_eq!(builder.draft(), &CharacterDraft::default());
        assert_eq!(builder.preview(), None);
        assert!(!builder.is_submittable());
    }

    #[test]
    fn set_field_overwrites_one_field() {
        let mut builder = builder();
        builder.set_field(CharacterField::Name, "Aria");
        builder.set_field(CharacterField::Name, "Aria Starfall");
        builder.set_field(CharacterField::Universe, "Isles");

        assert_eq!(builder.draft().name, "Aria Starfall");
        assert_eq!(builder.draft().universe, "Isles");
        assert!(builder.is_submittable());
    }

    #[test]
    fn avatar_updates_preview() {
        let mut builder = builder();
        builder.set_field(CharacterField::Avatar, "https://img.example/a.png");
        assert_eq!(builder.preview(), Some("https://img.example/a.png"));

        builder.set_field(CharacterField::Avatar, "");
        assert_eq!(builder.preview(), None);
    }

    #[test]
    fn set_field_named_parses_form_names() {
        let mut builder = builder();
        builder.set_field_named("class", "Rogue").unwrap();
        assert_eq!(builder.draft().class, "Rogue");

        let err = builder.set_field_named("height", "tall").unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[test]
    fn random_avatar_sets_avatar_and_preview() {
        let mut builder = DraftBuilder::new(Arc::new(FixedRandom(42)));
        let avatar = builder.generate_random_avatar().to_string();

        assert_eq!(avatar, "placeholder://portrait/random/42");
        assert_eq!(builder.draft().avatar, avatar);
        assert_eq!(builder.preview(), Some(avatar.as_str()));
    }

    #[test]
    fn commit_ability_trims_and_appends() {
        let mut builder = builder();
        builder.stage_ability("  Fireball ");
        assert!(builder.commit_ability());
        builder.stage_ability("Fireball");
        assert!(builder.commit_ability());

        assert_eq!(builder.draft().abilities, ["Fireball", "Fireball"]);
        assert_eq!(builder.staged_ability(), "");
    }

    #[test]
    fn whitespace_ability_is_a_silent_no_op() {
        let mut builder = builder();
        builder.stage_ability("Blink");
        builder.commit_ability();

        builder.stage_ability("  ");
        assert!(!builder.commit_ability());
        assert_eq!(builder.draft().abilities, ["Blink"]);
        assert_eq!(builder.staged_ability(), "  ");
    }

    #[test]
    fn remove_ability_keeps_the_rest_in_order() {
        let mut builder = builder();
        for ability in ["Blink", "Fireball", "Ward"] {
            builder.stage_ability(ability);
            builder.commit_ability();
        }

        assert_eq!(builder.remove_ability(1), Some("Fireball".to_string()));
        assert_eq!(builder.draft().abilities, ["Blink", "Ward"]);
        assert_eq!(builder.remove_ability(5), None);
        assert_eq!(builder.draft().abilities, ["Blink", "Ward"]);
    }

    #[test]
    fn commit_relationship_requires_both_sides() {
        let mut builder = builder();
        builder.stage_relationship("Bob", "");
        assert!(!builder.commit_relationship());
        assert!(builder.draft().relationships.is_empty());
        // input survives a rejected commit
        assert_eq!(builder.staged_relationship().name, "Bob");

        builder.stage_relationship(" Bob ", " brother ");
        assert!(builder.commit_relationship());
        assert_eq!(
            builder.draft().relationships,
            [Relationship::new("Bob", "brother")]
        );
        assert!(builder.staged_relationship().is_empty());
    }

    #[test]
    fn remove_relationship_out_of_range_is_ignored() {
        let mut builder = builder();
        builder.stage_relationship("Bob", "brother");
        builder.commit_relationship();
        builder.stage_relationship("Eve", "rival");
        builder.commit_relationship();

        assert_eq!(builder.remove_relationship(2), None);
        assert_eq!(
            builder.remove_relationship(0),
            Some(Relationship::new("Bob", "brother"))
        );
        assert_eq!(
            builder.draft().relationships,
            [Relationship::new("Eve", "rival")]
        );
    }

    #[test]
    fn submit_does_not_validate() {
        let builder = builder();
        assert_eq!(builder.submit(), CharacterDraft::default());
    }

    #[test]
    fn reset_clears_everything() {
        let mut builder = builder();
        builder.set_field(CharacterField::Name, "Aria");
        builder.generate_random_avatar();
        builder.stage_ability("Blink");
        builder.commit_ability();
        builder.stage_ability("half-typed");
        builder.stage_relationship("Bob", "");

        builder.reset();

        assert_eq!(builder.draft(), &CharacterDraft::default());
        assert_eq!(builder.preview(), None);
        assert_eq!(builder.staged_ability(), "");
        assert!(builder.staged_relationship().is_empty());
    }

    #[test]
    fn for_edit_prefills_from_character() {
        let draft = CharacterDraft::named("Aria")
            .with_field(CharacterField::Avatar, "https://img.example/a.png")
            .with_ability("Blink");
        let character = Character::new(CharacterId::new(), draft.validate().unwrap(), Utc::now());

        let builder = DraftBuilder::for_edit(&character, Arc::new(FixedRandom(0)));

        assert_eq!(builder.draft(), &draft);
        assert_eq!(builder.preview(), Some("https://img.example/a.png"));
    }
}
