//! Startup configuration and logging.
//!
//! # Components
//!
//! - [`config`] - Layered [`AppConfig`] (defaults, config file, environment)
//! - [`logging`] - File-backed tracing subscriber

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
