//! Content loaders for reading satchel data from files.
//!
//! Each loader turns one RON/TOML file into satchel-core types.
//! [`ContentFactory`] resolves the conventional file names inside a data
//! directory.

pub mod config;
pub mod factory;
pub mod item;
pub mod world;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalogRon, ItemLoader};
pub use world::{WorldLayout, WorldLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
