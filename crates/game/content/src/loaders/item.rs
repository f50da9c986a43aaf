//! Item catalog loader.

use std::path::Path;

use satchel_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// ```ron
/// (
///     items: [
///         (
///             handle: 1,
///             id: "healing_potion",
///             name: "Healing Potion",
///             sprite: "sprites/potion_red",
///             kind: Potion((amount_to_heal: 25)),
///         ),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogRon {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item definitions from a RON file containing an [`ItemCatalogRon`].
    ///
    /// Duplicate handles or ids are not checked here; the runtime catalog
    /// rejects them on insert.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load item catalog {}: {}", path.display(), e))
    }

    /// Parse item definitions from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalogRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        Ok(catalog.items)
    }
}
