//! Common utility functions shared across the Heroshelf crates.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{some_if_not_empty, trimmed_non_empty, StringExt};
