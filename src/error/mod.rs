//! Error handling for Vyapaar.
//!
//! Navigation, filtering and shell composition are total operations and never
//! fail. Errors only arise at the edges of the program:
//!
//! - **Configuration**: malformed config files or environment overrides
//! - **Terminal**: raw mode, alternate screen and drawing failures
//! - **Logging**: the log file could not be opened
//!
//! | Variant | Recoverable | Surfaced as |
//! |---------|-------------|-------------|
//! | `Config` | Yes (defaults are used) | warning on stderr |
//! | `Terminal` | No | exit with report |
//! | `Logging` | Yes (logging disabled) | warning on stderr |

mod app_error;
mod config;
mod result;

pub use app_error::AppError;
pub use config::ConfigError;
pub use result::AppResult;
