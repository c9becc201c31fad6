//! Observer port for collection changes and user-facing notices.

use heroshelf_domain::DomainEvent;
use serde::{Deserialize, Serialize};

/// Receives every change to the character collection.
///
/// Called synchronously, before the mutating operation returns.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogObserver: Send + Sync {
    /// A mutation was applied to the collection.
    fn on_event(&self, event: &DomainEvent);

    /// A short message meant for a transient notification.
    fn on_notice(&self, notice: &Notice);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Created,
    Updated,
    Deleted,
    /// The requested action exists but is switched off
    Unavailable,
}

/// Human-readable confirmation of a collection change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn character_created(name: &str) -> Self {
        Self::new(
            NoticeKind::Created,
            "Character created",
            format!("{} was added to your collection", name),
        )
    }

    pub fn character_updated(name: &str) -> Self {
        Self::new(
            NoticeKind::Updated,
            "Character updated",
            format!("Changes to {} were saved", name),
        )
    }

    pub fn character_deleted() -> Self {
        Self::new(
            NoticeKind::Deleted,
            "Character deleted",
            "The character was removed from your collection",
        )
    }

    pub fn editing_unavailable() -> Self {
        Self::new(
            NoticeKind::Unavailable,
            "Feature in development",
            "Editing characters will be available in a future update",
        )
    }
}
