//! Topic-based event bus for session events.
//!
//! Every executed action produces [`GameEvent`]s which the session publishes
//! on the [`EventBus`]; observers subscribe only to the topics they need.

mod bus;
mod extractor;
mod game_event;

pub use bus::{EventBus, SubscriptionId, Topic};
pub use extractor::extract_events;
pub use game_event::GameEvent;
