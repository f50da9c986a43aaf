//! Traits describing read-only item data.
//!
//! The item catalog is static content: definitions are created once, owned by
//! an [`ItemOracle`] implementation, and referenced from state through
//! [`crate::ItemHandle`]. [`GameEnv`] bundles the oracles an action needs.
mod error;
mod items;

pub use error::CatalogError;
pub use items::{
    AssetKey, ConsumableEffect, EffectOutcome, ItemCategory, ItemDefinition, ItemKind, ItemOracle,
    PoisonData, PotionData, WeaponData,
};

/// Read-only oracles passed to every action.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    items: &'a dyn ItemOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(items: &'a dyn ItemOracle) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'a dyn ItemOracle {
        self.items
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv").finish_non_exhaustive()
    }
}
