//! Runtime implementations of the satchel-core oracle traits.
//!
//! Static content is immutable once a session starts; dynamic state lives in
//! [`satchel_core::GameState`].
mod items;

pub use items::ItemCatalog;
