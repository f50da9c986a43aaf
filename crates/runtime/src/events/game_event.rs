//! Game events extracted from action outcomes.
//!
//! Events are what observers see: the UI layer redraws slots on
//! `ItemDisplayed`, the HUD updates on `HealthChanged`, and so on.

use serde::{Deserialize, Serialize};

use satchel_core::{ConsumableEffect, EntityId, EntryId, HealthChange, ItemHandle, SlotIndex};

use super::Topic;

/// High-level occurrences in the inventory subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A world item entered the inventory.
    ItemAdded { item: EntityId, handle: ItemHandle },

    /// A newly added item got a slot in the panel.
    ItemDisplayed {
        entry: EntryId,
        handle: ItemHandle,
        slot: SlotIndex,
    },

    /// An item is in the inventory but has no slot to be shown in.
    ItemNotDisplayed { handle: ItemHandle },

    /// Pickup refused because the inventory is full. The world item stays.
    PickupRejected { item: EntityId, handle: ItemHandle },

    SelectionChanged {
        previous: Option<EntryId>,
        current: Option<EntryId>,
    },

    /// A consumable was used up.
    ItemUsed {
        entry: EntryId,
        handle: ItemHandle,
        effect: ConsumableEffect,
    },

    ItemDestroyed { entry: EntryId, handle: ItemHandle },

    /// A dragged item was dropped onto an empty slot.
    ItemMoved {
        entry: EntryId,
        from: SlotIndex,
        to: SlotIndex,
    },

    DropRejected { entry: EntryId, target: SlotIndex },

    /// A drag ended without an accepted drop; the item went back into `slot`.
    ItemReturned { entry: EntryId, slot: SlotIndex },

    HealthChanged { before: u32, after: u32, max: u32 },

    /// Health reached zero. Emitted once per crossing.
    PlayerDied,

    PanelOpened { hp_text: String },

    PanelClosed,
}

impl GameEvent {
    pub fn topic(&self) -> Topic {
        use GameEvent::*;
        match self {
            ItemAdded { .. }
            | ItemDisplayed { .. }
            | ItemNotDisplayed { .. }
            | PickupRejected { .. }
            | ItemUsed { .. }
            | ItemDestroyed { .. }
            | ItemMoved { .. }
            | DropRejected { .. }
            | ItemReturned { .. } => Topic::Inventory,
            SelectionChanged { .. } => Topic::Selection,
            HealthChanged { .. } | PlayerDied => Topic::Health,
            PanelOpened { .. } | PanelClosed => Topic::Panel,
        }
    }

    pub(crate) fn health_changed(change: HealthChange) -> Self {
        Self::HealthChanged {
            before: change.before,
            after: change.after,
            max: change.max,
        }
    }
}
