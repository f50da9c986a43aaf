use crate::action::ActionTransition;
use crate::env::{ConsumableEffect, GameEnv};
use crate::state::{EntryId, GameState, HealthChange, ItemHandle};

/// Uses the selected item (the "use" button).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseSelectedAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UseOutcome {
    NothingSelected,
    /// The panel is hidden, so its buttons cannot be pressed.
    PanelClosed,
    /// The item has no consumable effect. Selection is kept.
    NotConsumable { entry: EntryId, handle: ItemHandle },
    /// The effect refused to apply (healing at full health). Selection is kept.
    NotConsumed {
        entry: EntryId,
        handle: ItemHandle,
        effect: ConsumableEffect,
    },
    /// The effect applied and the item is gone from panel and inventory.
    Consumed {
        entry: EntryId,
        handle: ItemHandle,
        effect: ConsumableEffect,
        change: HealthChange,
    },
}

impl ActionTransition for UseSelectedAction {
    type Outcome = UseOutcome;

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> UseOutcome {
        if !state.panel.is_open() {
            return UseOutcome::PanelClosed;
        }
        let Some(item) = state.panel.selected() else {
            return UseOutcome::NothingSelected;
        };
        let (entry, handle) = (item.id, item.handle);

        let effect = env
            .items()
            .definition(handle)
            .and_then(|def| def.consumable());
        let Some(effect) = effect else {
            tracing::debug!(%entry, %handle, "selected item is not consumable");
            return UseOutcome::NotConsumable { entry, handle };
        };

        let applied = effect.apply(&mut state.health);
        if applied.change.is_some() {
            state.panel.refresh_health(&state.health);
        }

        match (applied.consumed, applied.change) {
            (true, Some(change)) => {
                state.panel.remove_selected();
                state.inventory.remove(handle);
                UseOutcome::Consumed {
                    entry,
                    handle,
                    effect,
                    change,
                }
            }
            _ => UseOutcome::NotConsumed {
                entry,
                handle,
                effect,
            },
        }
    }
}

/// Destroys the selected item without applying any effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DestroySelectedAction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DestroyOutcome {
    NothingSelected,
    PanelClosed,
    Destroyed { entry: EntryId, handle: ItemHandle },
}

impl ActionTransition for DestroySelectedAction {
    type Outcome = DestroyOutcome;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> DestroyOutcome {
        if !state.panel.is_open() {
            return DestroyOutcome::PanelClosed;
        }
        let Some(removed) = state.panel.remove_selected() else {
            return DestroyOutcome::NothingSelected;
        };
        state.inventory.remove(removed.handle);
        DestroyOutcome::Destroyed {
            entry: removed.id,
            handle: removed.handle,
        }
    }
}
