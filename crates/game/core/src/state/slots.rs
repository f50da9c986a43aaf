//! Fixed grid of panel slots.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::state::{EntryId, SlotIndex};

/// Highlight state of a slot background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotVisual {
    Active,
    #[default]
    Inactive,
}

/// One panel cell, holding at most one displayed item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    occupant: Option<EntryId>,
    visual: SlotVisual,
}

impl Slot {
    pub fn occupant(&self) -> Option<EntryId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub fn visual(&self) -> SlotVisual {
        self.visual
    }
}

/// Slots in fixed display order.
///
/// Occupancy is independent of the inventory: the panel keeps the two in
/// sync when it displays or removes an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotGrid {
    slots: ArrayVec<Slot, { GameConfig::MAX_SLOTS }>,
}

impl SlotGrid {
    pub fn new(count: usize) -> Result<Self, ConfigError> {
        if count == 0 || count > GameConfig::MAX_SLOTS {
            return Err(ConfigError::SlotCountOutOfRange {
                value: count,
                max: GameConfig::MAX_SLOTS,
            });
        }
        let mut slots = ArrayVec::new();
        slots.extend((0..count).map(|_| Slot::default()));
        Ok(Self { slots })
    }

    /// Lowest-indexed unoccupied slot.
    pub fn first_free_slot(&self) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| !slot.is_occupied())
            .map(SlotIndex)
    }

    /// Places `entry` in an empty slot. Returns false if the slot is missing or taken.
    pub fn fill(&mut self, index: SlotIndex, entry: EntryId) -> bool {
        match self.slots.get_mut(index.0) {
            Some(slot) if !slot.is_occupied() => {
                slot.occupant = Some(entry);
                true
            }
            _ => false,
        }
    }

    /// Vacates a slot and returns its previous occupant.
    pub fn empty(&mut self, index: SlotIndex) -> Option<EntryId> {
        self.slots.get_mut(index.0)?.occupant.take()
    }

    /// A drop is accepted only onto an existing slot holding nothing.
    pub fn accepts_drop(&self, index: SlotIndex) -> bool {
        self.slots
            .get(index.0)
            .is_some_and(|slot| !slot.is_occupied())
    }

    pub fn set_active(&mut self, index: SlotIndex) {
        self.set_visual(index, SlotVisual::Active);
    }

    pub fn set_inactive(&mut self, index: SlotIndex) {
        self.set_visual(index, SlotVisual::Inactive);
    }

    fn set_visual(&mut self, index: SlotIndex, visual: SlotVisual) {
        if let Some(slot) = self.slots.get_mut(index.0) {
            slot.visual = visual;
        }
    }

    /// Finds the slot currently holding `entry`.
    pub fn slot_of(&self, entry: EntryId) -> Option<SlotIndex> {
        self.slots
            .iter()
            .position(|slot| slot.occupant == Some(entry))
            .map(SlotIndex)
    }

    pub fn get(&self, index: SlotIndex) -> Option<&Slot> {
        self.slots.get(index.0)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &Slot)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, slot)| (SlotIndex(index), slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_free_slot_is_lowest_unoccupied() {
        let mut grid = SlotGrid::new(4).unwrap();
        assert_eq!(grid.first_free_slot(), Some(SlotIndex(0)));

        grid.fill(SlotIndex(0), EntryId(1));
        grid.fill(SlotIndex(2), EntryId(2));
        assert_eq!(grid.first_free_slot(), Some(SlotIndex(1)));

        grid.fill(SlotIndex(1), EntryId(3));
        assert_eq!(grid.first_free_slot(), Some(SlotIndex(3)));

        grid.empty(SlotIndex(0));
        assert_eq!(grid.first_free_slot(), Some(SlotIndex(0)));
    }

    #[test]
    fn full_grid_has_no_free_slot() {
        let mut grid = SlotGrid::new(2).unwrap();
        grid.fill(SlotIndex(0), EntryId(1));
        grid.fill(SlotIndex(1), EntryId(2));

        assert_eq!(grid.first_free_slot(), None);
        assert_eq!(grid.occupied_count(), 2);
    }

    #[test]
    fn fill_refuses_occupied_or_missing_slot() {
        let mut grid = SlotGrid::new(2).unwrap();
        assert!(grid.fill(SlotIndex(0), EntryId(1)));
        assert!(!grid.fill(SlotIndex(0), EntryId(2)));
        assert!(!grid.fill(SlotIndex(5), EntryId(3)));
        assert_eq!(grid.get(SlotIndex(0)).and_then(Slot::occupant), Some(EntryId(1)));
    }

    #[test]
    fn drop_only_onto_empty_slot() {
        let mut grid = SlotGrid::new(3).unwrap();
        grid.fill(SlotIndex(1), EntryId(1));

        assert!(grid.accepts_drop(SlotIndex(0)));
        assert!(!grid.accepts_drop(SlotIndex(1)));
        assert!(!grid.accepts_drop(SlotIndex(3)));
    }

    #[test]
    fn visual_state_toggles() {
        let mut grid = SlotGrid::new(1).unwrap();
        let slot = SlotIndex(0);

        grid.set_active(slot);
        assert_eq!(grid.get(slot).map(Slot::visual), Some(SlotVisual::Active));
        grid.set_inactive(slot);
        assert_eq!(grid.get(slot).map(Slot::visual), Some(SlotVisual::Inactive));
    }

    #[test]
    fn rejects_unsupported_sizes() {
        assert!(SlotGrid::new(0).is_err());
        assert!(SlotGrid::new(GameConfig::MAX_SLOTS + 1).is_err());
    }
}
