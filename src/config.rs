//! Configuration management for the click tools.
//!
//! Configuration can be set via environment variables:
//! - `CUA_FAILSAFE` - Optional. Abort actions while the cursor sits in a screen corner. Defaults to `true`.
//! - `CUA_ACTION_PAUSE_SECS` - Optional. Seconds to sleep after each mouse action. Defaults to `0.1`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Desktop automation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the corner fail-safe is checked before each action
    pub failsafe: bool,

    /// Pause inserted after every completed move or click
    pub action_pause: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            failsafe: true,
            action_pause: Duration::from_millis(100),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let failsafe = lookup("CUA_FAILSAFE")
            .map(|v| {
                parse_bool(&v).map_err(|e| ConfigError::InvalidValue("CUA_FAILSAFE".to_string(), e))
            })
            .transpose()?
            .unwrap_or(defaults.failsafe);

        let action_pause = lookup("CUA_ACTION_PAUSE_SECS")
            .map(|v| {
                parse_secs(&v)
                    .map_err(|e| ConfigError::InvalidValue("CUA_ACTION_PAUSE_SECS".to_string(), e))
            })
            .transpose()?
            .unwrap_or(defaults.action_pause);

        Ok(Self {
            failsafe,
            action_pause,
        })
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Ok(false),
        other => Err(format!("expected boolean-like value, got: {}", other)),
    }
}

fn parse_secs(value: &str) -> Result<Duration, String> {
    let secs: f64 = value.trim().parse().map_err(|e| format!("{}", e))?;
    Duration::try_from_secs_f64(secs).map_err(|e| format!("{}", e))
}
