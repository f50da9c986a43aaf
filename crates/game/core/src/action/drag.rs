//! Drag and drop between slots.
//!
//! Repositioning is purely visual: the inventory is never touched.

use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::state::{EntryId, GameState, SelectionChange, SlotIndex};

/// Picks a displayed item up out of its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeginDragAction {
    pub entry: EntryId,
}

impl BeginDragAction {
    pub fn new(entry: EntryId) -> Self {
        Self { entry }
    }
}

/// A drag that started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragStart {
    pub entry: EntryId,
    pub from: SlotIndex,
    /// Dragging clears any selection.
    pub selection: SelectionChange,
}

impl ActionTransition for BeginDragAction {
    /// `None` if the panel is closed, or the entry is unknown or already
    /// being dragged.
    type Outcome = Option<DragStart>;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Option<DragStart> {
        if !state.panel.is_open() {
            return None;
        }
        state.panel.entry(self.entry)?.slot()?;
        let selection = state.panel.clear_selection();
        let from = state.panel.begin_drag(self.entry)?;
        Some(DragStart {
            entry: self.entry,
            from,
            selection,
        })
    }
}

/// Releases a dragged item over `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropAction {
    pub entry: EntryId,
    pub target: SlotIndex,
}

impl DropAction {
    pub fn new(entry: EntryId, target: SlotIndex) -> Self {
        Self { entry, target }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DropOutcome {
    Placed {
        entry: EntryId,
        from: SlotIndex,
        to: SlotIndex,
    },
    /// Target occupied or missing, the entry is not being dragged, or the
    /// panel is closed.
    Rejected { entry: EntryId, target: SlotIndex },
}

impl ActionTransition for DropAction {
    type Outcome = DropOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> DropOutcome {
        let origin = state
            .panel
            .entry(self.entry)
            .and_then(|item| item.drag_origin())
            .filter(|_| state.panel.is_open());

        match origin {
            Some(from) if state.panel.drop_on(self.entry, self.target) => DropOutcome::Placed {
                entry: self.entry,
                from,
                to: self.target,
            },
            _ => DropOutcome::Rejected {
                entry: self.entry,
                target: self.target,
            },
        }
    }
}

/// Ends a drag, whether or not a drop was accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndDragAction {
    pub entry: EntryId,
}

impl EndDragAction {
    pub fn new(entry: EntryId) -> Self {
        Self { entry }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndDragOutcome {
    /// The entry was already dropped into `slot`.
    Settled { entry: EntryId, slot: SlotIndex },
    /// No drop was accepted; the entry went back into `slot`.
    Returned { entry: EntryId, slot: SlotIndex },
    /// No drop was accepted and no slot was left to return to.
    Unplaced { entry: EntryId },
    UnknownEntry(EntryId),
}

impl ActionTransition for EndDragAction {
    type Outcome = EndDragOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> EndDragOutcome {
        let entry = self.entry;
        let Some(item) = state.panel.entry(entry) else {
            return EndDragOutcome::UnknownEntry(entry);
        };

        if let Some(slot) = item.slot() {
            return EndDragOutcome::Settled { entry, slot };
        }
        match state.panel.end_drag(entry) {
            Some(slot) => EndDragOutcome::Returned { entry, slot },
            None => EndDragOutcome::Unplaced { entry },
        }
    }
}
