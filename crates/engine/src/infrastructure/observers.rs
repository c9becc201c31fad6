//! Observer adapters.
//!
//! - [`TracingObserver`] writes every event and notice to the log
//! - [`RecordingObserver`] queues them for a renderer that pulls

use std::sync::{Mutex, MutexGuard};

use heroshelf_domain::DomainEvent;

use crate::infrastructure::ports::{CatalogObserver, Notice};

/// Logs collection changes through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogObserver for TracingObserver {
    fn on_event(&self, event: &DomainEvent) {
        match event.character_id() {
            Some(character_id) => tracing::info!(
                event_type = event.event_type(),
                character_id = %character_id,
                "Catalog changed"
            ),
            None => tracing::info!(event_type = event.event_type(), "Catalog changed"),
        }
    }

    fn on_notice(&self, notice: &Notice) {
        tracing::debug!(
            kind = ?notice.kind,
            title = %notice.title,
            description = %notice.description,
            "Notice"
        );
    }
}

/// Keeps events and notices until someone takes them.
#[derive(Debug)]
pub struct RecordingObserver {
    events: Mutex<Vec<DomainEvent>>,
    notices: Mutex<Vec<Notice>>,
    keep_events: bool,
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
            keep_events: true,
        }
    }

    /// Records notices and drops events, for an inbox that only ever
    /// drains notices.
    pub fn notices_only() -> Self {
        Self {
            keep_events: false,
            ..Self::new()
        }
    }

    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<DomainEvent> {
        lock(&self.events).clone()
    }

    /// Drain the pending events.
    pub fn take_events(&self) -> Vec<DomainEvent> {
        std::mem::take(&mut *lock(&self.events))
    }

    /// Drain the pending notices.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *lock(&self.notices))
    }
}

impl CatalogObserver for RecordingObserver {
    fn on_event(&self, event: &DomainEvent) {
        if self.keep_events {
            lock(&self.events).push(event.clone());
        }
    }

    fn on_notice(&self, notice: &Notice) {
        lock(&self.notices).push(notice.clone());
    }
}

// A panic while holding the lock cannot leave a Vec half-pushed
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
