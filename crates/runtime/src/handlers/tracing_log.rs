//! Handler that mirrors every event into the tracing log.

use tracing::{debug, info, warn};

use super::EventHandler;
use crate::events::{GameEvent, Topic};

/// Logs pickups, uses and destroys at `info`, rejections at `warn`, and
/// slot bookkeeping at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHandler;

impl EventHandler for TracingHandler {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn topics(&self) -> &[Topic] {
        Topic::ALL
    }

    fn handle(&mut self, event: &GameEvent) {
        use GameEvent::*;
        match event {
            ItemAdded { item, handle } => info!(%item, %handle, "item picked up"),
            ItemDisplayed {
                entry,
                handle,
                slot,
            } => debug!(%entry, %handle, %slot, "item displayed"),
            ItemNotDisplayed { handle } => warn!(%handle, "item carried without a free slot"),
            PickupRejected { item, handle } => warn!(%item, %handle, "inventory full"),
            SelectionChanged { previous, current } => {
                debug!(?previous, ?current, "selection changed")
            }
            ItemUsed {
                entry,
                handle,
                effect,
            } => info!(%entry, %handle, ?effect, "item used"),
            ItemDestroyed { entry, handle } => info!(%entry, %handle, "item destroyed"),
            ItemMoved { entry, from, to } => debug!(%entry, %from, %to, "item moved"),
            DropRejected { entry, target } => debug!(%entry, %target, "drop rejected"),
            ItemReturned { entry, slot } => debug!(%entry, %slot, "item returned to slot"),
            HealthChanged { before, after, max } => {
                info!(before, after, max, "health changed")
            }
            PlayerDied => warn!("player died"),
            PanelOpened { hp_text } => debug!(%hp_text, "panel opened"),
            PanelClosed => debug!("panel closed"),
        }
    }
}
