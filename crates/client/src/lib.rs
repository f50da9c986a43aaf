//! Composition root for the satchel console client.
//!
//! # Architecture
//!
//! ```text
//! main
//!   ├─→ ClientConfig (environment)
//!   ├─→ logging (tracing subscriber, file appender)
//!   ├─→ build_session (content files or built-in catalog)
//!   └─→ Console (stdin/stdout loop)
//! ```

pub mod config;
pub mod console;
pub mod logging;

pub use config::ClientConfig;
pub use console::Console;

use anyhow::{Context, Result};
use satchel_content::ContentFactory;
use satchel_core::GameConfig;
use satchel_runtime::{ItemCatalog, RuntimeConfig, Session, TracingHandler};

/// World contents used with the built-in catalog.
pub const DEFAULT_WORLD: &[&str] = &[
    "healing_potion",
    "healing_potion",
    "poison",
    "sword",
    "rusty_key",
];

/// Builds a session from the data directory, or from the built-in catalog
/// when none is configured. Environment overrides win over `config.toml`.
pub fn build_session(config: &ClientConfig) -> Result<Session> {
    let (game_config, catalog, world) = match &config.data_dir {
        Some(dir) => {
            let factory = ContentFactory::new(dir);
            let game_config = factory.load_config()?;
            let catalog = ItemCatalog::from_definitions(factory.load_items()?)
                .with_context(|| format!("Invalid item catalog in {}", dir.display()))?;
            let world = factory.load_world()?.items;
            tracing::info!(data_dir = %dir.display(), items = catalog.len(), "content loaded");
            (game_config, catalog, world)
        }
        None => {
            tracing::info!("no data directory configured, using built-in catalog");
            let world = DEFAULT_WORLD.iter().map(|id| id.to_string()).collect();
            (GameConfig::default(), ItemCatalog::builtin(), world)
        }
    };

    Session::builder()
        .config(RuntimeConfig::new(config.apply(game_config)))
        .catalog(catalog)
        .world_items(world)
        .handler(TracingHandler)
        .build()
        .context("Failed to build session")
}
