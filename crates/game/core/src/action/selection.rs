use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::state::{EntryId, GameState, SelectionChange};

/// Selects a displayed item (a click on its slot).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectAction {
    pub entry: EntryId,
}

impl SelectAction {
    pub fn new(entry: EntryId) -> Self {
        Self { entry }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectOutcome {
    Selected(SelectionChange),
    /// The entry is not displayed; nothing changed.
    UnknownEntry(EntryId),
    /// The panel is hidden, so its slots cannot be clicked.
    PanelClosed,
}

impl ActionTransition for SelectAction {
    type Outcome = SelectOutcome;

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> SelectOutcome {
        if !state.panel.is_open() {
            return SelectOutcome::PanelClosed;
        }
        let Some(item) = state.panel.entry(self.entry) else {
            return SelectOutcome::UnknownEntry(self.entry);
        };

        let name = env
            .items()
            .definition(item.handle)
            .map(|def| def.name.clone())
            .unwrap_or_else(|| item.handle.to_string());

        match state.panel.select(self.entry, name) {
            Some(change) => SelectOutcome::Selected(change),
            None => SelectOutcome::UnknownEntry(self.entry),
        }
    }
}

/// Returns to the nothing-selected state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearSelectionAction;

impl ActionTransition for ClearSelectionAction {
    type Outcome = SelectionChange;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> SelectionChange {
        state.panel.clear_selection()
    }
}
