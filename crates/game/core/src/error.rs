//! Common error infrastructure for satchel-core.
//!
//! Inventory operations themselves never fail: adding to a full inventory,
//! using an item at full health, or selecting a missing entry are reported
//! through outcome values. The errors here cover invalid configuration and
//! catalog data, which are rejected before a session starts.

/// Severity level of an error, used to decide how loudly it is reported.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: Unrecoverable errors, the session cannot start
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all satchel errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Give every variant its own `SCREAMING_SNAKE_CASE` code
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Invalid [`crate::GameConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigError {
    #[error("inventory capacity {value} is outside 1..={max}")]
    CapacityOutOfRange { value: usize, max: usize },

    #[error("slot count {value} is outside 1..={max}")]
    SlotCountOutOfRange { value: usize, max: usize },

    #[error("max health must be greater than zero")]
    ZeroMaxHealth,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityOutOfRange { .. } => "CONFIG_CAPACITY_OUT_OF_RANGE",
            Self::SlotCountOutOfRange { .. } => "CONFIG_SLOT_COUNT_OUT_OF_RANGE",
            Self::ZeroMaxHealth => "CONFIG_ZERO_MAX_HEALTH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_fatal_with_distinct_codes() {
        let errors = [
            ConfigError::CapacityOutOfRange { value: 0, max: 8 },
            ConfigError::SlotCountOutOfRange { value: 99, max: 64 },
            ConfigError::ZeroMaxHealth,
        ];

        let codes: Vec<_> = errors.iter().map(GameError::error_code).collect();
        assert_eq!(
            codes,
            [
                "CONFIG_CAPACITY_OUT_OF_RANGE",
                "CONFIG_SLOT_COUNT_OUT_OF_RANGE",
                "CONFIG_ZERO_MAX_HEALTH",
            ]
        );
        assert!(errors.iter().all(|err| err.severity() == ErrorSeverity::Fatal));
    }

    #[test]
    fn severity_names() {
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
