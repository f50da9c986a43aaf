//! Public runtime API surface.
//!
//! This module gathers the error types exposed to consumers of the runtime
//! crate so the session code can stay focused on orchestration.

pub mod errors;

pub use errors::{Result, RuntimeError};
