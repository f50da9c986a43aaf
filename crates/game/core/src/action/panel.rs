use crate::action::ActionTransition;
use crate::env::GameEnv;
use crate::state::{GameState, SelectionChange};

/// Shows the inventory panel and refreshes its HP text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenPanelAction;

impl ActionTransition for OpenPanelAction {
    type Outcome = ();

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) {
        state.panel.open(&state.health);
    }
}

/// Hides the inventory panel. Any selection is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClosePanelAction;

impl ActionTransition for ClosePanelAction {
    type Outcome = SelectionChange;

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> SelectionChange {
        state.panel.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SelectAction;
    use crate::action::test_support::{POTION, TestItems, carry, state};
    use crate::state::PlayerHealth;

    #[test]
    fn open_shows_current_health() {
        let items = TestItems::new();
        let mut state = state(2, 2);
        state.health = PlayerHealth::with_current(42, 100);

        OpenPanelAction.apply(&mut state, &items.env());
        assert!(state.panel.is_open());
        assert_eq!(state.panel.hp_text(), "HP: 42 / 100");
    }

    #[test]
    fn close_drops_selection() {
        let items = TestItems::new();
        let env = items.env();
        let mut state = state(2, 2);
        let potion = carry(&mut state, POTION);
        OpenPanelAction.apply(&mut state, &env);
        SelectAction::new(potion).apply(&mut state, &env);

        let change = ClosePanelAction.apply(&mut state, &env);
        assert_eq!(change.previous, Some(potion));
        assert!(!state.panel.is_open());
        assert!(!state.panel.interaction().is_visible());
    }
}
