//! Unified error types surfaced by the runtime API.
//!
//! Wraps configuration and catalog failures from satchel-core so clients can
//! bubble them up with consistent context. Gameplay rejections are never
//! errors; they come back as events.
use thiserror::Error;

use satchel_core::{CatalogError, ConfigError, EntityId, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires an item catalog before building")]
    MissingCatalog,

    #[error("invalid game configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid item catalog")]
    Catalog(#[from] CatalogError),

    #[error("no world item {0}")]
    UnknownWorldItem(EntityId),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingCatalog => ErrorSeverity::Fatal,
            Self::InvalidConfig(err) => err.severity(),
            Self::Catalog(err) => err.severity(),
            Self::UnknownWorldItem(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCatalog => "RUNTIME_MISSING_CATALOG",
            Self::InvalidConfig(err) => err.error_code(),
            Self::Catalog(err) => err.error_code(),
            Self::UnknownWorldItem(_) => "RUNTIME_UNKNOWN_WORLD_ITEM",
        }
    }
}

#[cfg(test)]
mod tests {
    use satchel_core::ItemHandle;

    use super::*;

    #[test]
    fn own_variants_have_runtime_codes() {
        let missing = RuntimeError::MissingCatalog;
        assert_eq!(missing.error_code(), "RUNTIME_MISSING_CATALOG");
        assert_eq!(missing.severity(), ErrorSeverity::Fatal);

        let unknown = RuntimeError::UnknownWorldItem(EntityId(7));
        assert_eq!(unknown.error_code(), "RUNTIME_UNKNOWN_WORLD_ITEM");
        assert_eq!(unknown.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let config = RuntimeError::from(ConfigError::ZeroMaxHealth);
        assert_eq!(config.error_code(), "CONFIG_ZERO_MAX_HEALTH");
        assert_eq!(config.severity(), ErrorSeverity::Fatal);

        let lookup = RuntimeError::from(CatalogError::UnknownId("dragon_egg".into()));
        assert_eq!(lookup.error_code(), "CATALOG_UNKNOWN_ID");
        assert_eq!(lookup.severity(), ErrorSeverity::Validation);

        let duplicate = RuntimeError::from(CatalogError::DuplicateHandle(ItemHandle(1)));
        assert_eq!(duplicate.severity(), ErrorSeverity::Fatal);
    }
}
