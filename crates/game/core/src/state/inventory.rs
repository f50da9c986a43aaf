//! Bounded item storage for the player.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::ItemHandle;

/// Ordered collection of carried items.
///
/// Holds references to catalog definitions, never copies. The same handle may
/// appear several times (two potions of the same kind).
///
/// # Invariants
///
/// - `items.len() <= capacity <= GameConfig::MAX_CAPACITY`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: ArrayVec<ItemHandle, { GameConfig::MAX_CAPACITY }>,
    capacity: usize,
}

impl Inventory {
    /// Creates an empty inventory. `capacity` is clamped to `MAX_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: ArrayVec::new(),
            capacity: capacity.min(GameConfig::MAX_CAPACITY),
        }
    }

    /// Appends an item. Returns false, leaving the inventory untouched, when full.
    pub fn add(&mut self, item: ItemHandle) -> bool {
        if !self.has_space() {
            tracing::debug!(%item, capacity = self.capacity, "inventory full");
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the first matching item. Returns false if it was not present.
    pub fn remove(&mut self, item: ItemHandle) -> bool {
        match self.items.iter().position(|held| *held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_space(&self) -> bool {
        self.items.len() < self.capacity
    }

    pub fn contains(&self, item: ItemHandle) -> bool {
        self.items.contains(&item)
    }

    pub fn count(&self, item: ItemHandle) -> usize {
        self.items.iter().filter(|held| **held == item).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn items(&self) -> &[ItemHandle] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemHandle> + '_ {
        self.items.iter().copied()
    }
}
