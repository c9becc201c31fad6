//! The authoritative character collection.
//!
//! Characters are kept newest first. Every mutation validates before it
//! touches the collection, so a rejected call leaves it exactly as it was.

use std::collections::HashSet;
use std::sync::Arc;

use heroshelf_domain::{Character, CharacterDraft, CharacterId, CharacterProfile, DomainEvent};

use crate::infrastructure::ports::{CatalogObserver, ClockPort, Notice, RandomPort};

use super::CatalogError;

/// How many freshly drawn ids may collide before `create` gives up
const MAX_ID_ATTEMPTS: usize = 8;

pub struct CharacterStore {
    characters: Vec<Character>,
    /// Every id handed out this session, including deleted ones
    issued_ids: HashSet<CharacterId>,
    clock: Arc<dyn ClockPort>,
    random: Arc<dyn RandomPort>,
    observers: Vec<Arc<dyn CatalogObserver>>,
    editing_enabled: bool,
}

impl CharacterStore {
    pub fn new(clock: Arc<dyn ClockPort>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            characters: Vec::new(),
            issued_ids: HashSet::new(),
            clock,
            random,
            observers: Vec::new(),
            editing_enabled: true,
        }
    }

    /// Switch `update` off; it then reports an "unavailable" notice instead.
    pub fn with_editing_enabled(mut self, enabled: bool) -> Self {
        self.editing_enabled = enabled;
        self
    }

    pub fn editing_enabled(&self) -> bool {
        self.editing_enabled
    }

    pub fn subscribe(&mut self, observer: Arc<dyn CatalogObserver>) {
        self.observers.push(observer);
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All characters, newest first.
    pub fn list(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Commit a draft as a new character at the front of the collection.
    pub fn create(&mut self, draft: &CharacterDraft) -> Result<Character, CatalogError> {
        let profile = validate(draft)?;
        let id = self.next_id()?;
        let character = Character::new(id, profile, self.clock.now());

        self.issued_ids.insert(id);
        self.characters.insert(0, character.clone());

        tracing::info!(character_id = %id, name = %character.name(), "Character created");
        self.publish(
            DomainEvent::CharacterCreated {
                character_id: id,
                name: character.name().to_string(),
            },
            Some(Notice::character_created(character.name().as_str())),
        );
        Ok(character)
    }

    /// Replace every editable field of an existing character.
    ///
    /// The character keeps its id, creation time and position.
    pub fn update(
        &mut self,
        id: CharacterId,
        draft: &CharacterDraft,
    ) -> Result<Character, CatalogError> {
        if !self.editing_enabled {
            tracing::info!(character_id = %id, "Update requested while editing is disabled");
            self.notify(&Notice::editing_unavailable());
            return Err(CatalogError::EditingUnavailable);
        }

        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        let profile = validate(draft)?;
        let now = self.clock.now();

        let character = &mut self.characters[index];
        let changes = character.replace_profile(profile, now);
        let updated = character.clone();

        tracing::info!(
            character_id = %id,
            changed = changes.len(),
            "Character updated"
        );
        self.publish(
            DomainEvent::CharacterUpdated {
                character_id: id,
                name: updated.name().to_string(),
                changes,
            },
            Some(Notice::character_updated(updated.name().as_str())),
        );
        Ok(updated)
    }

    /// Remove a character. Deleting the same id twice fails the second time.
    pub fn delete(&mut self, id: CharacterId) -> Result<(), CatalogError> {
        let index = self.position(id).ok_or_else(|| {
            tracing::warn!(character_id = %id, "Delete of unknown character");
            CatalogError::NotFound(id)
        })?;
        let removed = self.characters.remove(index);

        tracing::info!(character_id = %id, "Character deleted");
        self.publish(
            DomainEvent::CharacterDeleted {
                character_id: id,
                name: removed.name().to_string(),
            },
            Some(Notice::character_deleted()),
        );
        Ok(())
    }

    /// Bulk-load drafts after the existing characters, keeping their order.
    ///
    /// Either every draft is inserted or none is. Observers get a single
    /// `CollectionSeeded` event and no notices.
    pub fn seed(&mut self, drafts: &[CharacterDraft]) -> Result<usize, CatalogError> {
        let profiles = drafts
            .iter()
            .map(validate)
            .collect::<Result<Vec<_>, _>>()?;

        let mut ids = Vec::with_capacity(profiles.len());
        for _ in &profiles {
            let id = self.next_id()?;
            // Reserve now so the next draw cannot return the same id
            self.issued_ids.insert(id);
            ids.push(id);
        }

        let now = self.clock.now();
        let count = profiles.len();
        self.characters.extend(
            ids.into_iter()
                .zip(profiles)
                .map(|(id, profile)| Character::new(id, profile, now)),
        );

        tracing::info!(count, "Collection seeded");
        self.publish(DomainEvent::CollectionSeeded { count }, None);
        Ok(count)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn position(&self, id: CharacterId) -> Option<usize> {
        self.characters.iter().position(|c| c.id() == id)
    }

    fn next_id(&self) -> Result<CharacterId, CatalogError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = CharacterId::from_uuid(self.random.gen_uuid());
            if !self.issued_ids.contains(&id) {
                return Ok(id);
            }
            tracing::warn!(character_id = %id, "Generated character id collided, retrying");
        }
        Err(CatalogError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }

    fn publish(&self, event: DomainEvent, notice: Option<Notice>) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
        if let Some(notice) = notice {
            self.notify(&notice);
        }
    }

    fn notify(&self, notice: &Notice) {
        for observer in &self.observers {
            observer.on_notice(notice);
        }
    }
}

fn validate(draft: &CharacterDraft) -> Result<CharacterProfile, CatalogError> {
    draft.validate().map_err(|err| {
        tracing::warn!(error = %err, "Rejected character draft");
        CatalogError::from(err)
    })
}
