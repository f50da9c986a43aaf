//! Single-item selection state machine.

use crate::state::{EntryId, SlotGrid};

/// Tracks at most one selected entry and keeps slot highlights in sync.
///
/// States are `None` (nothing selected) and `Some(entry)`. Selecting replaces
/// the pointer, so two selections can never coexist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionController {
    selected: Option<EntryId>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<EntryId> {
        self.selected
    }

    pub fn is_selected(&self, entry: EntryId) -> bool {
        self.selected == Some(entry)
    }

    /// Selects `entry`, deactivating the previous selection's slot first.
    pub fn select(&mut self, entry: EntryId, grid: &mut SlotGrid) -> SelectionChange {
        let previous = self.selected;
        if let Some(slot) = previous.and_then(|prev| grid.slot_of(prev)) {
            grid.set_inactive(slot);
        }

        self.selected = Some(entry);
        if let Some(slot) = grid.slot_of(entry) {
            grid.set_active(slot);
        }

        SelectionChange {
            previous,
            current: Some(entry),
        }
    }

    /// Returns to the nothing-selected state.
    pub fn clear(&mut self, grid: &mut SlotGrid) -> SelectionChange {
        let previous = self.selected.take();
        if let Some(slot) = previous.and_then(|prev| grid.slot_of(prev)) {
            grid.set_inactive(slot);
        }
        SelectionChange {
            previous,
            current: None,
        }
    }
}

/// Selection transition, `previous -> current`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionChange {
    pub previous: Option<EntryId>,
    pub current: Option<EntryId>,
}

impl SelectionChange {
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}
