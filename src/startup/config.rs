//! Application configuration.
//!
//! Settings come from three layers, lowest priority first:
//!
//! 1. Built-in defaults ([`AppConfig::default`])
//! 2. `~/.vyapaar/config.json` (every field optional)
//! 3. Environment overrides (`VYAPAAR_BREAKPOINT`, `VYAPAAR_CELL_WIDTH`,
//!    `VYAPAAR_REPLY_DELAY_MS`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ui::layout::DEFAULT_BREAKPOINT;

/// Directory under the home directory holding Vyapaar files.
pub const CONFIG_DIR: &str = ".vyapaar";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding [`AppConfig::breakpoint`].
pub const ENV_BREAKPOINT: &str = "VYAPAAR_BREAKPOINT";
/// Environment variable overriding [`AppConfig::cell_width`].
pub const ENV_CELL_WIDTH: &str = "VYAPAAR_CELL_WIDTH";
/// Environment variable overriding [`AppConfig::reply_delay_ms`].
pub const ENV_REPLY_DELAY_MS: &str = "VYAPAAR_REPLY_DELAY_MS";

/// Runtime configuration.
///
/// Use the builder methods to customize behavior in tests.
///
/// # Example
///
/// ```ignore
/// use vyapaar::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_breakpoint(640)
///     .with_reply_delay_ms(10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logical width at or above which the desktop layout is used (default: 800)
    pub breakpoint: u32,
    /// Logical units per terminal column (default: 8)
    pub cell_width: u32,
    /// Delay before the simulated assistant reply arrives (default: 1200ms)
    pub reply_delay_ms: u64,
    /// How long a toast stays on screen (default: 3000ms)
    pub toast_duration_ms: u64,
    /// Event loop tick interval (default: 16ms)
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            cell_width: 8,
            reply_delay_ms: 1200,
            toast_duration_ms: 3000,
            tick_ms: 16,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout breakpoint in logical units.
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Set how many logical units one terminal column represents.
    pub fn with_cell_width(mut self, cell_width: u32) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Set the simulated assistant reply delay.
    pub fn with_reply_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reply_delay_ms = delay_ms;
        self
    }

    /// Set how long toasts stay visible.
    pub fn with_toast_duration_ms(mut self, duration_ms: u64) -> Self {
        self.toast_duration_ms = duration_ms;
        self
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Default config file location (`~/.vyapaar/config.json`).
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn default_path() -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        Some(home.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load the full configuration stack from disk and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match Self::default_path() {
            Some(path) => Self::from_file(&path)?.unwrap_or_default(),
            None => Self::default(),
        };
        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Read a config file.
    ///
    /// Returns `Ok(None)` if the file doesn't exist.
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded config from {}", path.display());
        config.validated().map(Some)
    }

    /// Apply environment-style overrides using `lookup` to fetch values.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_BREAKPOINT) {
            self.breakpoint = parse_number(ENV_BREAKPOINT, &value)?;
        }
        if let Some(value) = lookup(ENV_CELL_WIDTH) {
            self.cell_width = parse_number(ENV_CELL_WIDTH, &value)?;
        }
        if let Some(value) = lookup(ENV_REPLY_DELAY_MS) {
            self.reply_delay_ms = parse_number(ENV_REPLY_DELAY_MS, &value)?;
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.cell_width == 0 {
            return Err(ConfigError::Zero {
                key: "cell_width".to_string(),
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Zero {
                key: "tick_ms".to_string(),
            });
        }
        Ok(self)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.breakpoint, 800);
        assert_eq!(config.cell_width, 8);
        assert_eq!(config.reply_delay(), Duration::from_millis(1200));
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_builder_methods() {
        let config = AppConfig::new()
            .with_breakpoint(640)
            .with_cell_width(10)
            .with_reply_delay_ms(5)
            .with_toast_duration_ms(0);
        assert_eq!(config.breakpoint, 640);
        assert_eq!(config.cell_width, 10);
        assert_eq!(config.reply_delay_ms, 5);
        assert_eq!(config.toast_duration(), Duration::ZERO);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_BREAKPOINT, "1024"),
                (ENV_REPLY_DELAY_MS, " 50 "),
            ]))
            .unwrap();
        assert_eq!(config.breakpoint, 1024);
        assert_eq!(config.reply_delay_ms, 50);
        assert_eq!(config.cell_width, 8);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = AppConfig::default()
            .with_overrides(lookup_from(&[(ENV_CELL_WIDTH, "wide")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_zero_cell_width_rejected() {
        let err = AppConfig::default()
            .with_overrides(lookup_from(&[(ENV_CELL_WIDTH, "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Zero { .. }));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "breakpoint": 600 }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap().unwrap();
        assert_eq!(config.breakpoint, 600);
        assert_eq!(config.cell_width, 8);
        assert_eq!(config.reply_delay_ms, 1200);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ breakpoint: ").unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_file_with_zero_cell_width_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "cell_width": 0 }"#).unwrap();

        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Zero { ref key } if key == "cell_width"));
    }
}
