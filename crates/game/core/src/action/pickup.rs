use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::state::{DisplayOutcome, EntityId, GameState, Inventory, ItemHandle, WorldItem};

/// What touched a pickable object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Contact {
    Player,
    Other,
}

/// A world object that can be moved into an inventory.
pub trait Pickable {
    fn handle(&self) -> ItemHandle;

    /// Adds the carried item if the inventory has room.
    ///
    /// Returns true when the world object should be consumed.
    fn pick_up(&self, inventory: &mut Inventory) -> bool {
        inventory.add(self.handle())
    }
}

impl Pickable for WorldItem {
    fn handle(&self) -> ItemHandle {
        self.handle
    }
}

/// A contact with a pickable world item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpAction {
    pub item: EntityId,
    pub contact: Contact,
}

impl PickUpAction {
    pub fn new(item: EntityId, contact: Contact) -> Self {
        Self { item, contact }
    }

    pub fn by_player(item: EntityId) -> Self {
        Self::new(item, Contact::Player)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PickupOutcome {
    /// Item moved into the inventory; the world object is gone.
    Added {
        item: EntityId,
        handle: ItemHandle,
        display: DisplayOutcome,
    },
    /// Inventory full; the world object stays.
    InventoryFull { item: EntityId, handle: ItemHandle },
    /// Contact from something other than the player.
    IgnoredContact,
    /// No such world item (already picked up, or never spawned).
    UnknownItem(EntityId),
}

impl ActionTransition for PickUpAction {
    type Outcome = PickupOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> PickupOutcome {
        if self.contact != Contact::Player {
            return PickupOutcome::IgnoredContact;
        }
        let Some(world_item) = state.world.get(self.item).copied() else {
            return PickupOutcome::UnknownItem(self.item);
        };

        let handle = world_item.handle();
        if !world_item.pick_up(&mut state.inventory) {
            return PickupOutcome::InventoryFull {
                item: self.item,
                handle,
            };
        }

        state.world.remove(self.item);
        let display = state.panel.display(handle);
        PickupOutcome::Added {
            item: self.item,
            handle,
            display,
        }
    }
}
