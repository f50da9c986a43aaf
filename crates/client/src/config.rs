//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use satchel_core::GameConfig;

/// Configuration required to bootstrap a session and the console.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding `items.ron`, `config.toml` and `world.ron`.
    /// Without it the built-in catalog is used.
    pub data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub capacity: Option<usize>,
    pub slot_count: Option<usize>,
    pub max_health: Option<u32>,
    /// Log to stderr instead of the session log file.
    pub log_stderr: bool,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SATCHEL_DATA_DIR` - Content directory (default: built-in catalog)
    /// - `SATCHEL_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `SATCHEL_CAPACITY` - Inventory capacity override
    /// - `SATCHEL_SLOTS` - Panel slot count override
    /// - `SATCHEL_MAX_HEALTH` - Max health override
    /// - `SATCHEL_LOG_STDERR` - Log to stderr instead of a file (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_stderr = match read_env(&lookup, "SATCHEL_LOG_STDERR") {
            Some(value) => value.parse::<bool>().unwrap_or(value == "1"),
            None => false,
        };

        Self {
            data_dir: read_env(&lookup, "SATCHEL_DATA_DIR").map(PathBuf::from),
            session_id: read_env(&lookup, "SATCHEL_SESSION_ID"),
            capacity: parse_env(&lookup, "SATCHEL_CAPACITY"),
            slot_count: parse_env(&lookup, "SATCHEL_SLOTS"),
            max_health: parse_env(&lookup, "SATCHEL_MAX_HEALTH"),
            log_stderr,
        }
    }

    /// Applies the environment overrides on top of a loaded configuration.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(capacity) = self.capacity {
            config.inventory_capacity = capacity;
        }
        if let Some(slot_count) = self.slot_count {
            config.slot_count = slot_count;
        }
        if let Some(max_health) = self.max_health {
            config.max_health = max_health;
        }
        config
    }
}

/// Non-blank value of `key`, trimmed.
fn read_env(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Parsed value of `key`. Unparsable values are ignored.
fn parse_env<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    read_env(lookup, key).and_then(|value| value.parse().ok())
}
