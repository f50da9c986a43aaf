//! Event extraction from action outcomes.
//!
//! This module converts the outcome of an applied [`satchel_core::Action`]
//! into the [`GameEvent`]s observers react to.

use satchel_core::{
    ActionOutcome, DisplayOutcome, DropOutcome, EndDragOutcome, GameState, PickupOutcome,
    SelectOutcome, SelectionChange, UseOutcome,
};

use super::GameEvent;

/// Extract game events from an action outcome.
///
/// `state` is the state after the action ran.
///
/// # Event Ordering
///
/// - Pickup: `ItemAdded`, then the display result.
/// - Use: `HealthChanged`, `PlayerDied` on the lethal crossing, `ItemUsed`,
///   then the selection reset.
/// - Destroy: `ItemDestroyed`, then the selection reset.
/// - Close: the selection reset, then `PanelClosed`.
pub fn extract_events(outcome: &ActionOutcome, state: &GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    match outcome {
        ActionOutcome::PickUp(outcome) => match *outcome {
            PickupOutcome::Added {
                item,
                handle,
                display,
            } => {
                events.push(GameEvent::ItemAdded { item, handle });
                events.push(match display {
                    DisplayOutcome::Displayed { entry, slot } => GameEvent::ItemDisplayed {
                        entry,
                        handle,
                        slot,
                    },
                    DisplayOutcome::NoFreeSlot => GameEvent::ItemNotDisplayed { handle },
                });
            }
            PickupOutcome::InventoryFull { item, handle } => {
                events.push(GameEvent::PickupRejected { item, handle });
            }
            PickupOutcome::IgnoredContact | PickupOutcome::UnknownItem(_) => {}
        },

        ActionOutcome::Select(SelectOutcome::Selected(change)) => {
            push_selection(&mut events, *change);
        }
        ActionOutcome::Select(SelectOutcome::UnknownEntry(_) | SelectOutcome::PanelClosed) => {}

        ActionOutcome::ClearSelection(change) => push_selection(&mut events, *change),

        ActionOutcome::UseSelected(outcome) => {
            if let UseOutcome::Consumed {
                entry,
                handle,
                effect,
                change,
            } = *outcome
            {
                events.push(GameEvent::health_changed(change));
                if change.died() {
                    events.push(GameEvent::PlayerDied);
                }
                events.push(GameEvent::ItemUsed {
                    entry,
                    handle,
                    effect,
                });
                push_selection(
                    &mut events,
                    SelectionChange {
                        previous: Some(entry),
                        current: None,
                    },
                );
            }
        }

        ActionOutcome::DestroySelected(outcome) => {
            if let satchel_core::DestroyOutcome::Destroyed { entry, handle } = *outcome {
                events.push(GameEvent::ItemDestroyed { entry, handle });
                push_selection(
                    &mut events,
                    SelectionChange {
                        previous: Some(entry),
                        current: None,
                    },
                );
            }
        }

        ActionOutcome::BeginDrag(start) => {
            if let Some(start) = start {
                push_selection(&mut events, start.selection);
            }
        }

        ActionOutcome::Drop(outcome) => events.push(match *outcome {
            DropOutcome::Placed { entry, from, to } => GameEvent::ItemMoved { entry, from, to },
            DropOutcome::Rejected { entry, target } => GameEvent::DropRejected { entry, target },
        }),

        ActionOutcome::EndDrag(outcome) => match *outcome {
            EndDragOutcome::Returned { entry, slot } => {
                events.push(GameEvent::ItemReturned { entry, slot });
            }
            EndDragOutcome::Unplaced { entry } => {
                if let Some(item) = state.panel.entry(entry) {
                    events.push(GameEvent::ItemNotDisplayed {
                        handle: item.handle,
                    });
                }
            }
            EndDragOutcome::Settled { .. } | EndDragOutcome::UnknownEntry(_) => {}
        },

        ActionOutcome::OpenPanel => events.push(GameEvent::PanelOpened {
            hp_text: state.panel.hp_text().to_owned(),
        }),

        ActionOutcome::ClosePanel(change) => {
            push_selection(&mut events, *change);
            events.push(GameEvent::PanelClosed);
        }
    }

    events
}

fn push_selection(events: &mut Vec<GameEvent>, change: SelectionChange) {
    if !change.is_noop() {
        events.push(GameEvent::SelectionChanged {
            previous: change.previous,
            current: change.current,
        });
    }
}

#[cfg(test)]
mod tests {
    use satchel_core::{
        ConsumableEffect, EntityId, EntryId, GameConfig, HealthChange, ItemHandle, SlotIndex,
    };

    use super::*;

    fn state() -> GameState {
        GameState::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn pickup_emits_added_then_displayed() {
        let outcome = ActionOutcome::PickUp(PickupOutcome::Added {
            item: EntityId(3),
            handle: ItemHandle(1),
            display: DisplayOutcome::Displayed {
                entry: EntryId(0),
                slot: SlotIndex(0),
            },
        });

        assert_eq!(
            extract_events(&outcome, &state()),
            vec![
                GameEvent::ItemAdded {
                    item: EntityId(3),
                    handle: ItemHandle(1)
                },
                GameEvent::ItemDisplayed {
                    entry: EntryId(0),
                    handle: ItemHandle(1),
                    slot: SlotIndex(0)
                },
            ]
        );
    }

    #[test]
    fn lethal_use_emits_death_after_health_change() {
        let outcome = ActionOutcome::UseSelected(UseOutcome::Consumed {
            entry: EntryId(1),
            handle: ItemHandle(2),
            effect: ConsumableEffect::Damage(15),
            change: HealthChange {
                before: 10,
                after: 0,
                max: 100,
            },
        });

        let events = extract_events(&outcome, &state());
        assert_eq!(
            events[..2],
            [
                GameEvent::HealthChanged {
                    before: 10,
                    after: 0,
                    max: 100
                },
                GameEvent::PlayerDied,
            ]
        );
        assert!(matches!(events[2], GameEvent::ItemUsed { .. }));
        assert!(matches!(
            events[3],
            GameEvent::SelectionChanged { current: None, .. }
        ));
    }

    #[test]
    fn refused_use_emits_nothing() {
        let outcome = ActionOutcome::UseSelected(UseOutcome::NotConsumed {
            entry: EntryId(1),
            handle: ItemHandle(1),
            effect: ConsumableEffect::Heal(10),
        });
        assert!(extract_events(&outcome, &state()).is_empty());
    }

    #[test]
    fn noop_selection_change_is_silent() {
        let outcome = ActionOutcome::ClearSelection(SelectionChange {
            previous: None,
            current: None,
        });
        assert!(extract_events(&outcome, &state()).is_empty());

        let outcome = ActionOutcome::ClosePanel(SelectionChange {
            previous: None,
            current: None,
        });
        assert_eq!(
            extract_events(&outcome, &state()),
            vec![GameEvent::PanelClosed]
        );
    }
}
