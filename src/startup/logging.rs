//! Tracing subscriber initialization.
//!
//! The terminal belongs to the UI, so logs go to a file instead of stderr:
//! `<cache dir>/vyapaar/vyapaar.log`.
//!
//! # Filter priority (highest to lowest)
//!
//! 1. `VYAPAAR_LOG` env var (e.g. `vyapaar=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. `info` when logging was requested with `--log`
//!
//! Without any of these, no subscriber is installed.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::error::{AppError, AppResult};

/// Project-specific filter variable.
pub const ENV_LOG: &str = "VYAPAAR_LOG";

const LOG_FILE: &str = "vyapaar.log";

/// Path of the log file, if a cache directory is available.
pub fn log_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join("vyapaar").join(LOG_FILE))
}

/// Build the filter, or `None` when logging should stay off.
pub fn build_env_filter(force: bool) -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var(ENV_LOG) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return Some(filter);
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Some(filter);
    }

    force.then(|| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns the log file path when logging was enabled. Must be called at most
/// once per process.
pub fn init_logging(force: bool) -> AppResult<Option<PathBuf>> {
    let Some(filter) = build_env_filter(force) else {
        return Ok(None);
    };

    let path = log_path().ok_or_else(|| AppError::Logging {
        message: "no cache directory available".to_string(),
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Logging {
            message: format!("cannot create {}: {}", parent.display(), e),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| AppError::Logging {
            message: format!("cannot open {}: {}", path.display(), e),
        })?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Logging {
            message: e.to_string(),
        })?;

    tracing::info!("Logging to {}", path.display());
    Ok(Some(path))
}
