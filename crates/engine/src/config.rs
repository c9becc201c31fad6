//! Catalog settings loaded from the environment.
//!
//! Supported environment variables:
//! - HEROSHELF_SEED_SAMPLES: seed the bundled sample characters (default: true)
//! - HEROSHELF_EDITING_ENABLED: allow editing committed characters (default: true)
//! - HEROSHELF_EXCERPT_CHARS: card backstory excerpt length (range: 20-1000, default: 160)
//! - HEROSHELF_QUERY: initial search query (default: empty)
//! - HEROSHELF_RANDOM_SEED: seed for ids and random avatars (default: OS entropy)
//!
//! Invalid values are logged and ignored.

use crate::use_cases::catalog_view::DEFAULT_EXCERPT_CHARS;

const MIN_EXCERPT_CHARS: usize = 20;
const MAX_EXCERPT_CHARS: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub seed_samples: bool,
    pub editing_enabled: bool,
    pub excerpt_chars: usize,
    pub initial_query: String,
    pub random_seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            editing_enabled: true,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            initial_query: String::new(),
            random_seed: None,
        }
    }
}

impl CatalogConfig {
    /// Load settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("HEROSHELF_SEED_SAMPLES") {
            match parse_bool(&val) {
                Some(flag) => config.seed_samples = flag,
                None => tracing::warn!(val = %val, "HEROSHELF_SEED_SAMPLES is not a boolean, ignoring"),
            }
        }

        if let Some(val) = lookup("HEROSHELF_EDITING_ENABLED") {
            match parse_bool(&val) {
                Some(flag) => config.editing_enabled = flag,
                None => tracing::warn!(
                    val = %val,
                    "HEROSHELF_EDITING_ENABLED is not a boolean, ignoring"
                ),
            }
        }

        if let Some(val) = lookup("HEROSHELF_EXCERPT_CHARS") {
            match val.trim().parse::<usize>() {
                Ok(chars) if (MIN_EXCERPT_CHARS..=MAX_EXCERPT_CHARS).contains(&chars) => {
                    config.excerpt_chars = chars;
                    tracing::info!(chars, "Applied HEROSHELF_EXCERPT_CHARS environment variable");
                }
                Ok(chars) => tracing::warn!(
                    chars,
                    "HEROSHELF_EXCERPT_CHARS out of range [20, 1000], ignoring"
                ),
                Err(_) => tracing::warn!(
                    val = %val,
                    "HEROSHELF_EXCERPT_CHARS is not a valid number, ignoring"
                ),
            }
        }

        if let Some(val) = lookup("HEROSHELF_QUERY") {
            config.initial_query = val;
        }

        if let Some(val) = lookup("HEROSHELF_RANDOM_SEED") {
            match val.trim().parse::<u64>() {
                Ok(seed) => config.random_seed = Some(seed),
                Err(_) => tracing::warn!(
                    val = %val,
                    "HEROSHELF_RANDOM_SEED is not a valid number, ignoring"
                ),
            }
        }

        config
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
