//! Event handlers: observers registered on the [`crate::EventBus`].
//!
//! A handler names the topics it listens to and reacts to each delivered
//! [`GameEvent`]. Handlers never mutate game state; they drive side effects
//! such as logging or UI refreshes.

mod tracing_log;

pub use tracing_log::TracingHandler;

use crate::events::{GameEvent, Topic};

/// Observer of session events.
///
/// # Execution Order
///
/// Handlers are sorted by priority (lower values execute first):
/// - Negative priorities: handlers other observers rely on (logging)
/// - Zero: default priority for most handlers
/// - Positive priorities: cosmetic handlers
pub trait EventHandler {
    /// Returns a human-readable name for this handler (used in logging and debugging).
    fn name(&self) -> &'static str;

    fn priority(&self) -> i32 {
        0
    }

    /// Topics this handler is subscribed to.
    fn topics(&self) -> &[Topic];

    fn handle(&mut self, event: &GameEvent);
}

/// Adapter turning a closure into a single-topic [`EventHandler`].
pub struct FnHandler<F> {
    topic: [Topic; 1],
    callback: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&GameEvent),
{
    pub fn new(topic: Topic, callback: F) -> Self {
        Self {
            topic: [topic],
            callback,
        }
    }
}

impl<F> EventHandler for FnHandler<F>
where
    F: FnMut(&GameEvent),
{
    fn name(&self) -> &'static str {
        "callback"
    }

    fn topics(&self) -> &[Topic] {
        &self.topic
    }

    fn handle(&mut self, event: &GameEvent) {
        (self.callback)(event)
    }
}
