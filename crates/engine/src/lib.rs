//! Heroshelf Engine library.
//!
//! In-memory catalog of characters: the collection store, the draft builder
//! used while creating or editing a character, and the catalog view that a
//! rendering surface displays.
//!
//! ## Structure
//!
//! - `stores/` - The authoritative character collection
//! - `use_cases/` - Draft building and catalog view derivation
//! - `infrastructure/` - Ports (clock, randomness, observers) and their adapters
//! - `config` - Environment-driven settings for the binary
//! - `seed` - Bundled sample collection
//! - `app` - Session composition

pub mod app;
pub mod config;
pub mod infrastructure;
pub mod seed;
pub mod stores;
pub mod use_cases;

pub use app::App;
pub use config::CatalogConfig;
pub use stores::{CatalogError, CharacterStore};
