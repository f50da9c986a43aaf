//! Content factory for loading all satchel content from a data directory.

use std::path::{Path, PathBuf};

use satchel_core::{GameConfig, ItemDefinition};

use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, WorldLayout, WorldLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── world.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const ITEMS_FILE: &'static str = "items.ron";
    pub const WORLD_FILE: &'static str = "world.ron";

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join(Self::ITEMS_FILE))
    }

    /// Load world placements from `world.ron`.
    ///
    /// A missing file yields an empty world.
    pub fn load_world(&self) -> LoadResult<WorldLayout> {
        let path = self.data_dir.join(Self::WORLD_FILE);
        if !path.exists() {
            return Ok(WorldLayout::default());
        }
        WorldLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn optional_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
        assert!(factory.load_world().unwrap().items.is_empty());
        assert!(factory.load_items().is_err());
    }

    #[test]
    fn loads_shipped_data_directory() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
        let factory = ContentFactory::new(data_dir);

        let config = factory.load_config().unwrap();
        let items = factory.load_items().unwrap();
        let world = factory.load_world().unwrap();

        assert!(config.validate().is_ok());
        assert!(!items.is_empty());
        assert!(
            world
                .items
                .iter()
                .all(|id| items.iter().any(|def| &def.id == id))
        );
    }
}
