//! Application state and composition.
//!
//! One `App` is one catalog session: it owns the store and the view and
//! hands out draft builders. A rendering surface drives it and reads back
//! pages, details and pending notices.

use std::sync::Arc;

use heroshelf_domain::{Character, CharacterId};

use crate::config::CatalogConfig;
use crate::infrastructure::observers::{RecordingObserver, TracingObserver};
use crate::infrastructure::ports::{CatalogObserver, ClockPort, Notice, RandomPort};
use crate::seed::{self, SeedError};
use crate::stores::{CatalogError, CharacterStore};
use crate::use_cases::{CatalogPage, CatalogView, CharacterDetail, DraftBuilder};

pub struct App {
    pub store: CharacterStore,
    pub view: CatalogView,
    config: CatalogConfig,
    random: Arc<dyn RandomPort>,
    inbox: Arc<RecordingObserver>,
}

impl App {
    pub fn new(
        config: CatalogConfig,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let inbox = Arc::new(RecordingObserver::notices_only());
        let mut store = CharacterStore::new(clock, random.clone())
            .with_editing_enabled(config.editing_enabled);
        store.subscribe(Arc::new(TracingObserver::new()));
        store.subscribe(inbox.clone());

        let mut view = CatalogView::new(config.excerpt_chars);
        view.set_query(config.initial_query.clone());

        Self {
            store,
            view,
            config,
            random,
            inbox,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Add another observer of collection changes.
    pub fn subscribe(&mut self, observer: Arc<dyn CatalogObserver>) {
        self.store.subscribe(observer);
    }

    pub fn seed_samples(&mut self) -> Result<usize, SeedError> {
        seed::seed_samples(&mut self.store)
    }

    // =========================================================================
    // Drafts
    // =========================================================================

    /// An empty builder for a new character.
    pub fn new_draft(&self) -> DraftBuilder {
        DraftBuilder::new(self.random.clone())
    }

    /// Commit the builder as a new character; the builder is reset on success
    /// and left as it was on failure.
    pub fn commit_new(&mut self, builder: &mut DraftBuilder) -> Result<Character, CatalogError> {
        let character = self.store.create(&builder.submit())?;
        builder.reset();
        Ok(character)
    }

    /// A builder pre-filled with the character's current values.
    pub fn begin_edit(&self, id: CharacterId) -> Result<DraftBuilder, CatalogError> {
        let character = self.store.get(id).ok_or(CatalogError::NotFound(id))?;
        Ok(DraftBuilder::for_edit(character, self.random.clone()))
    }

    /// Commit the builder over an existing character; the builder is reset
    /// on success.
    pub fn commit_edit(
        &mut self,
        id: CharacterId,
        builder: &mut DraftBuilder,
    ) -> Result<Character, CatalogError> {
        let character = self.store.update(id, &builder.submit())?;
        builder.reset();
        Ok(character)
    }

    pub fn delete(&mut self, id: CharacterId) -> Result<(), CatalogError> {
        self.store.delete(id)
    }

    // =========================================================================
    // Reading
    // =========================================================================

    pub fn search(&mut self, query: impl Into<String>) {
        self.view.set_query(query);
    }

    pub fn page(&self) -> CatalogPage {
        self.view.page(&self.store)
    }

    pub fn detail(&self, id: CharacterId) -> Result<CharacterDetail, CatalogError> {
        self.store
            .get(id)
            .map(CharacterDetail::from)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Notices produced since the last call, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        self.inbox.take_notices()
    }
}
