//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Problems found while loading [`AppConfig`](crate::startup::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`AppConfig`](crate::startup::AppConfig).
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An environment override is not a number.
    #[error("{key}={value} is not a valid number")]
    InvalidNumber { key: String, value: String },

    /// A numeric setting is outside its allowed range.
    #[error("{key} must be greater than zero")]
    Zero { key: String },
}

impl ConfigError {
    /// Name of the setting or file that caused the error.
    pub fn source_name(&self) -> String {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => {
                path.display().to_string()
            }
            ConfigError::InvalidNumber { key, .. } | ConfigError::Zero { key } => key.clone(),
        }
    }
}
