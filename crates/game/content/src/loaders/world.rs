//! World item placement loader.
//!
//! A world layout lists the items lying around when a session starts, by
//! catalog id. Positions are the collision system's business and are not
//! stored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// World layout structure for RON files.
///
/// ```ron
/// (items: ["healing_potion", "poison", "sword"])
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldLayout {
    #[serde(default)]
    pub items: Vec<String>,
}

/// Loader for world layouts from RON files.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<WorldLayout> {
        let content = read_file(path)?;
        let layout: WorldLayout = ron::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse world RON {}: {}", path.display(), e)
        })?;

        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_item_ids_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.ron");
        std::fs::write(&path, r#"(items: ["poison", "healing_potion", "poison"])"#).unwrap();

        let layout = WorldLoader::load(&path).unwrap();
        assert_eq!(layout.items, ["poison", "healing_potion", "poison"]);
    }

    #[test]
    fn empty_layout_is_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.ron");
        std::fs::write(&path, "(items: [])").unwrap();

        assert_eq!(WorldLoader::load(&path).unwrap(), WorldLayout::default());
    }
}
