//! Pickable items lying in the world.

use std::collections::BTreeMap;

use crate::state::{EntityId, ItemHandle};

/// A world object carrying an item definition, waiting to be picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldItem {
    pub id: EntityId,
    pub handle: ItemHandle,
}

/// Every pickable item currently present in the world, keyed by entity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldItems {
    items: BTreeMap<EntityId, WorldItem>,
    /// Monotonic allocator; ids are never reused.
    next_id: u32,
}

impl WorldItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new pickable carrying `handle` and returns its id.
    pub fn spawn(&mut self, handle: ItemHandle) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.items.insert(id, WorldItem { id, handle });
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&WorldItem> {
        self.items.get(&id)
    }

    /// Destroys the world object.
    pub fn remove(&mut self, id: EntityId) -> Option<WorldItem> {
        self.items.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorldItem> + '_ {
        self.items.values()
    }
}
