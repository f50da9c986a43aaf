//! Authoritative inventory game state.
//!
//! Runtime layers read this state freely but mutate it only through
//! [`crate::Action`]s, which keep the inventory and the panel in sync.
mod common;
mod health;
mod inventory;
mod panel;
mod selection;
mod slots;
mod world;

pub use common::{EntityId, EntryId, ItemHandle, SlotIndex};
pub use health::{HealthChange, PlayerHealth};
pub use inventory::Inventory;
pub use panel::{DisplayOutcome, DisplayedItem, InteractionPanel, InventoryPanel};
pub use selection::{SelectionChange, SelectionController};
pub use slots::{Slot, SlotGrid, SlotVisual};
pub use world::{WorldItem, WorldItems};

use crate::config::GameConfig;
use crate::error::ConfigError;

/// Canonical snapshot of the inventory subsystem.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Items the player carries.
    pub inventory: Inventory,
    /// Presentation state: slots, displayed items, selection, HUD text.
    pub panel: InventoryPanel,
    pub health: PlayerHealth,
    /// Pickables not collected yet.
    pub world: WorldItems,
}

impl GameState {
    /// Creates a fresh state: empty inventory, closed panel, full health.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let health = PlayerHealth::new(config.max_health);
        Ok(Self {
            inventory: Inventory::new(config.inventory_capacity),
            panel: InventoryPanel::new(config.slot_count, &health)?,
            health,
            world: WorldItems::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_empty_and_healthy() {
        let config = GameConfig::new().with_capacity(2).with_max_health(50);
        let state = GameState::new(&config).unwrap();

        assert!(state.inventory.is_empty());
        assert_eq!(state.inventory.capacity(), 2);
        assert_eq!(state.health.current(), 50);
        assert_eq!(state.panel.hp_text(), "HP: 50 / 50");
        assert!(!state.panel.is_open());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig::new().with_max_health(0);
        assert_eq!(GameState::new(&config), Err(ConfigError::ZeroMaxHealth));
    }
}
