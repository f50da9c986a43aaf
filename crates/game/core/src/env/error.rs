//! Item catalog errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::ItemHandle;

/// Errors raised while building or querying an item catalog.
///
/// Catalog problems are detected at load time, before any session state
/// exists, so they are classified as validation or fatal errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    /// Two definitions share the same handle.
    #[error("duplicate item handle {0}")]
    DuplicateHandle(ItemHandle),

    /// Two definitions share the same string id.
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),

    /// A definition has an empty string id.
    #[error("item {0} has an empty id")]
    EmptyId(ItemHandle),

    /// No definition exists for the given string id.
    #[error("unknown item id '{0}'")]
    UnknownId(String),

    /// No definition exists for the given handle.
    #[error("unknown item handle {0}")]
    UnknownHandle(ItemHandle),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            DuplicateHandle(_) | DuplicateId(_) | EmptyId(_) => ErrorSeverity::Fatal,
            UnknownId(_) | UnknownHandle(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            DuplicateHandle(_) => "CATALOG_DUPLICATE_HANDLE",
            DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            EmptyId(_) => "CATALOG_EMPTY_ID",
            UnknownId(_) => "CATALOG_UNKNOWN_ID",
            UnknownHandle(_) => "CATALOG_UNKNOWN_HANDLE",
        }
    }
}
