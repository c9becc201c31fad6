//! Heroshelf - Main entry point.
//!
//! Builds a catalog session from the environment, seeds the sample
//! collection and logs the resulting page.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heroshelf_engine::infrastructure::clock::{SystemClock, SystemRandom};
use heroshelf_engine::{App, CatalogConfig};

fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary usually runs from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroshelf_engine=debug,heroshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Heroshelf");

    let config = CatalogConfig::from_env();
    tracing::debug!(?config, "Loaded catalog configuration");

    let random = match config.random_seed {
        Some(seed) => SystemRandom::seeded(seed),
        None => SystemRandom::new(),
    };
    let mut app = App::new(config.clone(), Arc::new(SystemClock::new()), Arc::new(random));

    if config.seed_samples {
        let count = app.seed_samples()?;
        tracing::info!(count, "Loaded sample characters");
    }

    let page = app.page();
    if let Some(empty) = &page.empty_state {
        tracing::info!(title = %empty.title, "{}", empty.description);
    }
    for card in &page.cards {
        tracing::info!(
            character_id = %card.id,
            subtitle = card.subtitle.as_deref().unwrap_or(""),
            avatar = %card.avatar,
            "{}",
            card.name
        );
    }

    tracing::info!(
        shown = page.cards.len(),
        total = app.store.len(),
        query = %page.query,
        "Catalog ready"
    );
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
