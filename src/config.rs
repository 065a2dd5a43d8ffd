//! Display configuration.
//!
//! The host hands over a loosely-typed mapping; this module turns it into an
//! immutable [`DisplayConfig`] with named, typed fields. Any subset of keys may
//! be supplied and unknown keys are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ConfigError;

/// Default max length for inline tool parameters.
pub const DEFAULT_MAX_PARAM_LEN: usize = 50;

/// Default max length for result summaries.
pub const DEFAULT_MAX_RESULT_LEN: usize = 60;

/// Display configuration, read once when the hook is mounted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Master switch. When false nothing is rendered.
    pub enabled: bool,
    /// Render thinking blocks (indicator and condensed text).
    pub show_thinking: bool,
    /// Render the token summary after the last content block.
    pub show_token_usage: bool,
    /// Max length for inline tool parameters.
    pub max_param_len: usize,
    /// Max length for each result line.
    pub max_result_len: usize,
    /// Indent lines that come from sub-agent sessions.
    pub indent_sub_agents: bool,
    /// Prefix sub-agent lines with `[agent-name]`.
    pub show_agent_name: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            show_thinking: true,
            show_token_usage: true,
            max_param_len: DEFAULT_MAX_PARAM_LEN,
            max_result_len: DEFAULT_MAX_RESULT_LEN,
            indent_sub_agents: true,
            show_agent_name: true,
        }
    }
}

impl DisplayConfig {
    /// Build a config from the host's module-configuration mapping.
    ///
    /// `null` yields the defaults.
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_value(&value)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.max_param_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_param_len",
            });
        }
        if self.max_result_len == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_result_len",
            });
        }
        Ok(self)
    }
}
