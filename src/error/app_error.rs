//! Top-level error type for the application.

use thiserror::Error;

use super::config::ConfigError;

/// Unified error type for Vyapaar.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },
}

impl AppError {
    /// Whether the application can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Terminal(_))
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(err) => format!(
                "Ignoring invalid configuration from {} ({}). Using defaults.",
                err.source_name(),
                err
            ),
            AppError::Terminal(_) => {
                "Failed to control the terminal. You may need to reset your terminal settings."
                    .to_string()
            }
            AppError::Logging { message } => {
                format!("Logging disabled: {}", message)
            }
        }
    }
}
