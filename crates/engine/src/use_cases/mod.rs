//! Use cases driven by the rendering surface.
//!
//! - `draft_builder` - staging a character before it is committed
//! - `catalog_view` - the visible, searchable list and detail views

pub mod catalog_view;
pub mod draft_builder;

pub use catalog_view::{CatalogPage, CatalogView, CharacterCard, CharacterDetail, EmptyState};
pub use draft_builder::DraftBuilder;
