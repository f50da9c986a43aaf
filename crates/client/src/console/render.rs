//! Plain-text views of the session.

use std::fmt::Write as _;

use satchel_core::{ConsumableEffect, ItemOracle, SlotVisual};
use satchel_runtime::{GameEvent, Session};

/// Panel view: HP text, one line per slot, and the interaction panel.
pub fn status(session: &Session) -> String {
    let state = session.state();
    let panel = &state.panel;
    let mut out = String::new();

    let visibility = if panel.is_open() { "open" } else { "closed" };
    let _ = writeln!(out, "{}  [panel {}]", panel.hp_text(), visibility);
    let _ = writeln!(
        out,
        "inventory {}/{}",
        state.inventory.len(),
        state.inventory.capacity()
    );

    for (index, slot) in panel.slots().iter() {
        let marker = match slot.visual() {
            SlotVisual::Active => '*',
            SlotVisual::Inactive => ' ',
        };
        let content = match panel.entry_in(index) {
            Some(displayed) => format!(
                "#{} {}",
                displayed.id.0,
                session.items().name_of(displayed.handle)
            ),
            None => "-".to_owned(),
        };
        let _ = writeln!(out, " {marker}[{}] {content}", index.0);
    }

    let dragging: Vec<_> = panel
        .entries()
        .iter()
        .filter(|displayed| displayed.is_dragging())
        .map(|displayed| displayed.id.0.to_string())
        .collect();
    if !dragging.is_empty() {
        let _ = writeln!(out, "dragging: #{}", dragging.join(", #"));
    }

    match panel.interaction().item_name() {
        Some(name) => {
            let _ = write!(out, "selected: {name}  (use | destroy)");
        }
        None => {
            let _ = write!(out, "nothing selected");
        }
    }
    out
}

/// Catalog listing, one item per line.
pub fn catalog(session: &Session) -> String {
    let items = session.items();
    items
        .handles()
        .into_iter()
        .filter_map(|handle| items.definition(handle))
        .map(|def| {
            let effect = match def.consumable() {
                Some(effect) => format!("  ({})", effect_text(effect)),
                None => String::new(),
            };
            format!("{:<16} {:<16} {}{}", def.id, def.name, def.category(), effect)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Items lying in the world.
pub fn world(session: &Session) -> String {
    let world = &session.state().world;
    if world.is_empty() {
        return "the world is empty".to_owned();
    }
    world
        .iter()
        .map(|item| format!("@{} {}", item.id.0, session.items().name_of(item.handle)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line description of an event.
pub fn event(session: &Session, event: &GameEvent) -> String {
    let name = |handle| session.items().name_of(handle);
    match event {
        GameEvent::ItemAdded { item, handle } => {
            format!("picked up {} (@{})", name(*handle), item.0)
        }
        GameEvent::ItemDisplayed {
            entry,
            handle,
            slot,
        } => format!("{} shown as #{} in slot {}", name(*handle), entry.0, slot.0),
        GameEvent::ItemNotDisplayed { handle } => {
            format!("{} carried, but no slot is free", name(*handle))
        }
        GameEvent::PickupRejected { handle, .. } => {
            format!("inventory full, {} stays on the ground", name(*handle))
        }
        GameEvent::SelectionChanged { current, .. } => match current {
            Some(entry) => format!("selected #{}", entry.0),
            None => "selection cleared".to_owned(),
        },
        GameEvent::ItemUsed { handle, effect, .. } => {
            format!("used {}: {}", name(*handle), effect_text(*effect))
        }
        GameEvent::ItemDestroyed { handle, .. } => format!("destroyed {}", name(*handle)),
        GameEvent::ItemMoved { entry, from, to } => {
            format!("moved #{} from slot {} to slot {}", entry.0, from.0, to.0)
        }
        GameEvent::DropRejected { target, .. } => {
            format!("slot {} does not accept drops", target.0)
        }
        GameEvent::ItemReturned { entry, slot } => {
            format!("#{} returned to slot {}", entry.0, slot.0)
        }
        GameEvent::HealthChanged { before, after, max } => {
            format!("HP {before} -> {after} / {max}")
        }
        GameEvent::PlayerDied => "you died".to_owned(),
        GameEvent::PanelOpened { hp_text } => format!("panel opened, {hp_text}"),
        GameEvent::PanelClosed => "panel closed".to_owned(),
    }
}

fn effect_text(effect: ConsumableEffect) -> String {
    match effect {
        ConsumableEffect::Heal(amount) => format!("heals {amount}"),
        ConsumableEffect::Damage(amount) => format!("deals {amount} damage"),
    }
}
