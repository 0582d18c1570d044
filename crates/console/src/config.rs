//! Console configuration, read from the environment.

use thiserror::Error;

use lootbag_inventory::DEFAULT_CAPACITY;
use lootbag_observability::LogFormat;

pub const CAPACITY_VAR: &str = "LOOTBAG_CAPACITY";
pub const LOG_FORMAT_VAR: &str = "LOOTBAG_LOG_FORMAT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Number of backpack slots.
    pub capacity: usize,
    pub log_format: LogFormat,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            log_format: LogFormat::default(),
        }
    }
}

impl ConsoleConfig {
    /// Unset variables fall back to defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_VAR) {
            config.capacity = match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        var: CAPACITY_VAR,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: CAPACITY_VAR,
                        reason: format!("'{raw}': {e}"),
                    });
                }
            };
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            config.log_format = raw.parse().map_err(|reason| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                reason,
            })?;
        }

        Ok(config)
    }
}
