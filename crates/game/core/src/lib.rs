//! Inventory rules and data types shared across the satchel crates.
//!
//! `satchel-core` defines the canonical state (inventory, slot grid,
//! selection, player health, world items) and the actions that mutate it.
//! Every mutation flows through an [`Action`] applied against a
//! [`GameState`] and a read-only [`GameEnv`]; the outcome values describe what
//! happened so outer layers can notify observers.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    Action, ActionOutcome, ActionTransition, BeginDragAction, ClearSelectionAction,
    ClosePanelAction, Contact, DestroyOutcome, DestroySelectedAction, DragStart, DropAction,
    DropOutcome, EndDragAction, EndDragOutcome, OpenPanelAction, PickUpAction, Pickable,
    PickupOutcome, SelectAction, SelectOutcome, UseOutcome, UseSelectedAction,
};
pub use config::GameConfig;
pub use env::{
    AssetKey, CatalogError, ConsumableEffect, EffectOutcome, GameEnv, ItemCategory,
    ItemDefinition, ItemKind, ItemOracle, PoisonData, PotionData, WeaponData,
};
pub use error::{ConfigError, ErrorSeverity, GameError};
pub use state::{
    DisplayOutcome, DisplayedItem, EntityId, EntryId, GameState, HealthChange, InteractionPanel,
    Inventory, InventoryPanel, ItemHandle, PlayerHealth, SelectionChange, SelectionController,
    Slot, SlotGrid, SlotIndex, SlotVisual, WorldItem, WorldItems,
};
