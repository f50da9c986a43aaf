//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};

use super::GameEvent;
use crate::handlers::{EventHandler, FnHandler};

/// Topics for event routing
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Topic {
    /// Items entering, leaving, or moving inside the inventory panel
    Inventory,
    /// Selection pointer changes
    Selection,
    /// Player health changes and death
    Health,
    /// Panel open/close
    Panel,
}

impl Topic {
    pub const ALL: &'static [Topic] = &[
        Topic::Inventory,
        Topic::Selection,
        Topic::Health,
        Topic::Panel,
    ];
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscriber {
    id: SubscriptionId,
    handler: Box<dyn EventHandler>,
}

/// Synchronous topic-based event bus.
///
/// Observers register for the topics they care about and are called in
/// priority order (lower first) during [`EventBus::publish`]. Registration
/// order breaks ties.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for every topic it lists.
    pub fn register(&mut self, handler: impl EventHandler + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let priority = handler.priority();
        let index = self
            .subscribers
            .partition_point(|sub| sub.handler.priority() <= priority);
        tracing::debug!(handler = handler.name(), priority, "registered event handler");
        self.subscribers.insert(
            index,
            Subscriber {
                id,
                handler: Box::new(handler),
            },
        );
        id
    }

    /// Registers a callback for a single topic.
    pub fn subscribe<F>(&mut self, topic: Topic, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent) + 'static,
    {
        self.register(FnHandler::new(topic, callback))
    }

    /// Removes a subscription. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|sub| sub.id != id);
        self.subscribers.len() != before
    }

    /// Delivers an event to every handler subscribed to its topic.
    pub fn publish(&mut self, event: &GameEvent) {
        let topic = event.topic();
        let mut delivered = false;
        for sub in self.subscribers.iter_mut() {
            if sub.handler.topics().contains(&topic) {
                sub.handler.handle(event);
                delivered = true;
            }
        }

        if !delivered {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    pub fn publish_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.publish(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Registered handler names in delivery order (for debugging).
    pub fn handler_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.subscribers.iter().map(|sub| sub.handler.name())
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_names().collect::<Vec<_>>())
            .finish()
    }
}
