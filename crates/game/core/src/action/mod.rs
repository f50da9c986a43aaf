//! Actions: the only way to mutate [`GameState`].
//!
//! Each concrete action implements [`ActionTransition`] and reports what
//! happened through an outcome value. Game-rule rejections (full inventory,
//! healing at full health, dropping onto an occupied slot) are outcomes, not
//! errors; unknown references are reported as no-op outcomes.
//!
//! # Module Structure
//!
//! - `pickup`: world contact → inventory
//! - `selection`: select / clear
//! - `consume`: use / destroy the selected item
//! - `drag`: begin drag / drop / end drag
//! - `panel`: open / close the inventory panel

mod consume;
mod drag;
mod panel;
mod pickup;
mod selection;

pub use consume::{DestroyOutcome, DestroySelectedAction, UseOutcome, UseSelectedAction};
pub use drag::{BeginDragAction, DragStart, DropAction, DropOutcome, EndDragAction, EndDragOutcome};
pub use panel::{ClosePanelAction, OpenPanelAction};
pub use pickup::{Contact, PickUpAction, Pickable, PickupOutcome};
pub use selection::{ClearSelectionAction, SelectAction, SelectOutcome};

use crate::env::GameEnv;
use crate::state::{GameState, SelectionChange};

/// Defines how a concrete action mutates game state.
pub trait ActionTransition {
    type Outcome;

    /// Applies the action by mutating the game state directly.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Self::Outcome;
}

/// Top-level action enum accepted by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    PickUp(PickUpAction),
    Select(SelectAction),
    ClearSelection(ClearSelectionAction),
    UseSelected(UseSelectedAction),
    DestroySelected(DestroySelectedAction),
    BeginDrag(BeginDragAction),
    Drop(DropAction),
    EndDrag(EndDragAction),
    OpenPanel(OpenPanelAction),
    ClosePanel(ClosePanelAction),
}

/// Outcome of any [`Action`], tagged by the action that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    PickUp(PickupOutcome),
    Select(SelectOutcome),
    ClearSelection(SelectionChange),
    UseSelected(UseOutcome),
    DestroySelected(DestroyOutcome),
    BeginDrag(Option<DragStart>),
    Drop(DropOutcome),
    EndDrag(EndDragOutcome),
    OpenPanel,
    ClosePanel(SelectionChange),
}

impl Action {
    /// Dispatches to the concrete action's [`ActionTransition::apply`].
    pub fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> ActionOutcome {
        match self {
            Action::PickUp(action) => ActionOutcome::PickUp(action.apply(state, env)),
            Action::Select(action) => ActionOutcome::Select(action.apply(state, env)),
            Action::ClearSelection(action) => {
                ActionOutcome::ClearSelection(action.apply(state, env))
            }
            Action::UseSelected(action) => ActionOutcome::UseSelected(action.apply(state, env)),
            Action::DestroySelected(action) => {
                ActionOutcome::DestroySelected(action.apply(state, env))
            }
            Action::BeginDrag(action) => ActionOutcome::BeginDrag(action.apply(state, env)),
            Action::Drop(action) => ActionOutcome::Drop(action.apply(state, env)),
            Action::EndDrag(action) => ActionOutcome::EndDrag(action.apply(state, env)),
            Action::OpenPanel(action) => {
                action.apply(state, env);
                ActionOutcome::OpenPanel
            }
            Action::ClosePanel(action) => ActionOutcome::ClosePanel(action.apply(state, env)),
        }
    }

    /// Returns the snake_case name of the action.
    ///
    /// Used for logging and console echo.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::PickUp(_) => "pick_up",
            Action::Select(_) => "select",
            Action::ClearSelection(_) => "clear_selection",
            Action::UseSelected(_) => "use_selected",
            Action::DestroySelected(_) => "destroy_selected",
            Action::BeginDrag(_) => "begin_drag",
            Action::Drop(_) => "drop",
            Action::EndDrag(_) => "end_drag",
            Action::OpenPanel(_) => "open_panel",
            Action::ClosePanel(_) => "close_panel",
        }
    }
}

macro_rules! impl_from_action {
    ($($variant:ident($action:ty)),* $(,)?) => {
        $(
            impl From<$action> for Action {
                fn from(action: $action) -> Self {
                    Self::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    PickUp(PickUpAction),
    Select(SelectAction),
    ClearSelection(ClearSelectionAction),
    UseSelected(UseSelectedAction),
    DestroySelected(DestroySelectedAction),
    BeginDrag(BeginDragAction),
    Drop(DropAction),
    EndDrag(EndDragAction),
    OpenPanel(OpenPanelAction),
    ClosePanel(ClosePanelAction),
);

/// Shared fixtures for action tests.
#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use crate::env::{
        ItemDefinition, ItemKind, ItemOracle, PoisonData, PotionData, WeaponData,
    };
    use crate::state::{DisplayOutcome, EntryId, GameState, ItemHandle};
    use crate::{GameConfig, GameEnv};

    pub const POTION: ItemHandle = ItemHandle(1);
    pub const POISON: ItemHandle = ItemHandle(2);
    pub const SWORD: ItemHandle = ItemHandle(3);

    pub struct TestItems(BTreeMap<ItemHandle, ItemDefinition>);

    impl TestItems {
        pub fn new() -> Self {
            let defs = [
                ItemDefinition::new(
                    POTION,
                    "healing_potion",
                    "Healing Potion",
                    ItemKind::Potion(PotionData { amount_to_heal: 30 }),
                ),
                ItemDefinition::new(
                    POISON,
                    "poison",
                    "Poison",
                    ItemKind::Poison(PoisonData {
                        amount_to_damage: 15,
                    }),
                ),
                ItemDefinition::new(
                    SWORD,
                    "sword",
                    "Sword",
                    ItemKind::Weapon(WeaponData { damage: 7 }),
                ),
            ];
            Self(defs.into_iter().map(|def| (def.handle, def)).collect())
        }

        pub fn env(&self) -> GameEnv<'_> {
            GameEnv::new(self)
        }
    }

    impl ItemOracle for TestItems {
        fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
            self.0.get(&handle)
        }

        fn find(&self, id: &str) -> Option<&ItemDefinition> {
            self.0.values().find(|def| def.id == id)
        }

        fn handles(&self) -> Vec<ItemHandle> {
            self.0.keys().copied().collect()
        }
    }

    /// State with the panel open, ready for clicks and drags.
    pub fn state(capacity: usize, slots: usize) -> GameState {
        let config = GameConfig::new()
            .with_capacity(capacity)
            .with_slot_count(slots);
        let mut state = GameState::new(&config).unwrap();
        state.panel.open(&state.health);
        state
    }

    /// Adds `handle` to the inventory and panel as a pickup would.
    pub fn carry(state: &mut GameState, handle: ItemHandle) -> EntryId {
        assert!(state.inventory.add(handle));
        match state.panel.display(handle) {
            DisplayOutcome::Displayed { entry, .. } => entry,
            DisplayOutcome::NoFreeSlot => panic!("no free slot in fixture"),
        }
    }
}
