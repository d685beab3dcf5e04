//! Display configuration
//!
//! Loaded from a TOML file. A missing file means defaults; the target epoch is
//! fixed and has no setting here.

use crate::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default refresh interval of the full-screen view
pub const DEFAULT_TICK_MS: u64 = 100;

/// Default interval between plain-text blocks
pub const DEFAULT_PLAIN_INTERVAL_MS: u64 = 1000;

/// Color theme selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Presentation settings for the countdown loops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Milliseconds between refreshes of the full-screen view
    pub tick_ms: u64,
    /// Milliseconds between plain-text blocks
    pub plain_interval_ms: u64,
    /// Color theme for the full-screen view
    pub theme: ThemeName,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            plain_interval_ms: DEFAULT_PLAIN_INTERVAL_MS,
            theme: ThemeName::default(),
        }
    }
}

impl DisplayConfig {
    /// Reject settings the loops cannot run with
    pub fn validate(&self) -> Result<(), CliError> {
        if self.tick_ms == 0 {
            return Err(CliError::Configuration(
                "tick_ms must be greater than zero".to_string(),
            ));
        }
        if self.plain_interval_ms == 0 {
            return Err(CliError::Configuration(
                "plain_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults when it is absent
pub fn load_config(path: &Path) -> Result<DisplayConfig, CliError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DisplayConfig::default());
    }

    let config_str = std::fs::read_to_string(path).map_err(|e| {
        CliError::FileSystem(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    let config: DisplayConfig = toml::from_str(&config_str).map_err(|e| {
        CliError::Configuration(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })?;

    config.validate()?;
    tracing::debug!(?config, "loaded display config");
    Ok(config)
}
