//! Runtime orchestration for the satchel inventory subsystem.
//!
//! This crate wires the item catalog, the game state and the event bus into
//! a [`Session`]. Consumers build a session, register observers, and feed it
//! input (pickups, clicks, drags); every call returns the [`GameEvent`]s it
//! produced, which are also published on the bus.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator and builder
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`handlers`] holds reusable observers
//! - [`oracle`] provides the item catalog backing [`satchel_core::ItemOracle`]
pub mod api;
pub mod events;
pub mod handlers;
pub mod oracle;
pub mod session;

pub use api::{Result, RuntimeError};
pub use events::{EventBus, GameEvent, SubscriptionId, Topic, extract_events};
pub use handlers::{EventHandler, FnHandler, TracingHandler};
pub use oracle::ItemCatalog;
pub use session::{RuntimeConfig, Session, SessionBuilder};
