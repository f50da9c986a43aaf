//! In-memory [`satchel_core::ItemOracle`] holding the item catalog.
use std::collections::HashMap;

use satchel_core::{
    CatalogError, ItemDefinition, ItemHandle, ItemKind, ItemOracle, PoisonData, PotionData,
    WeaponData,
};

/// Immutable set of item definitions, indexed by handle and by string id.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    definitions: HashMap<ItemHandle, ItemDefinition>,
    ids: HashMap<String, ItemHandle>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog, rejecting duplicate handles or ids.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ItemDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.insert(def)?;
        }
        Ok(catalog)
    }

    /// Adds a definition. Handles and ids must be unique.
    pub fn insert(&mut self, def: ItemDefinition) -> Result<(), CatalogError> {
        if def.id.is_empty() {
            return Err(CatalogError::EmptyId(def.handle));
        }
        if self.definitions.contains_key(&def.handle) {
            return Err(CatalogError::DuplicateHandle(def.handle));
        }
        if self.ids.contains_key(&def.id) {
            return Err(CatalogError::DuplicateId(def.id));
        }

        self.ids.insert(def.id.clone(), def.handle);
        self.definitions.insert(def.handle, def);
        Ok(())
    }

    /// Resolves a string id to its handle.
    pub fn resolve(&self, id: &str) -> Result<ItemHandle, CatalogError> {
        self.ids
            .get(id)
            .copied()
            .ok_or_else(|| CatalogError::UnknownId(id.to_owned()))
    }

    /// Display name for `handle`, falling back to the handle itself.
    pub fn name_of(&self, handle: ItemHandle) -> String {
        self.definitions
            .get(&handle)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| handle.to_string())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Catalog used when no data directory is configured.
    pub fn builtin() -> Self {
        let definitions = [
            ItemDefinition::new(
                ItemHandle(1),
                "healing_potion",
                "Healing Potion",
                ItemKind::Potion(PotionData { amount_to_heal: 25 }),
            )
            .with_sprite("sprites/potion_red")
            .with_material("materials/glass"),
            ItemDefinition::new(
                ItemHandle(2),
                "poison",
                "Poison",
                ItemKind::Poison(PoisonData {
                    amount_to_damage: 15,
                }),
            )
            .with_sprite("sprites/potion_green")
            .with_material("materials/glass"),
            ItemDefinition::new(
                ItemHandle(3),
                "sword",
                "Sword",
                ItemKind::Weapon(WeaponData { damage: 7 }),
            )
            .with_sprite("sprites/sword"),
            ItemDefinition::new(
                ItemHandle(4),
                "rusty_key",
                "Rusty Key",
                ItemKind::Key { door_id: 1 },
            )
            .with_sprite("sprites/key"),
        ];

        let mut catalog = Self::new();
        for def in definitions {
            catalog.ids.insert(def.id.clone(), def.handle);
            catalog.definitions.insert(def.handle, def);
        }
        catalog
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.definitions.get(&handle)
    }

    fn find(&self, id: &str) -> Option<&ItemDefinition> {
        self.ids
            .get(id)
            .and_then(|handle| self.definitions.get(handle))
    }

    fn handles(&self) -> Vec<ItemHandle> {
        let mut handles: Vec<_> = self.definitions.keys().copied().collect();
        handles.sort();
        handles
    }
}
