//! Controller configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid controller configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("history_limit must be greater than zero")]
    ZeroHistoryLimit,
}

/// Tunables for a [`StateController`](crate::machine::StateController).
///
/// Every field has a default, so an empty JSON object is a valid config.
///
/// # Example
///
/// ```rust
/// use keystone::config::ControllerConfig;
///
/// let config = ControllerConfig::from_json(r#"{ "history_limit": 16 }"#).unwrap();
/// assert_eq!(config.history_limit, Some(16));
/// assert!(config.log_rejections);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Keep at most this many transitions in history. `None` keeps all.
    pub history_limit: Option<usize>,

    /// Log rejected events at `info` instead of `debug`.
    pub log_rejections: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            history_limit: None,
            log_rejections: true,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == Some(0) {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(())
    }

    /// Replace values that cannot be honoured. A history limit of zero
    /// would discard every transition, so it is read as "no limit".
    pub fn normalized(mut self) -> Self {
        if self.history_limit == Some(0) {
            self.history_limit = None;
        }
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    pub fn with_log_rejections(mut self, enabled: bool) -> Self {
        self.log_rejections = enabled;
        self
    }
}
