//! Error types for configuration loading.
//!
//! Nothing here crosses the hook boundary: the hook falls back to defaults
//! and reports the error as a warning line instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from building a [`DisplayConfig`](crate::DisplayConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be greater than zero")]
    InvalidValue { field: &'static str },
}
