//! Configuration types for the Aegis dashboard.
//!
//! Configuration is loaded from a single YAML file (`aegis.yaml`). Every
//! section is optional, so an empty file yields a working default setup.
//!
//! # Sections
//!
//! - **dashboard**: listen address and browser refresh cadence
//! - **display**: timestamp formatting and status column rendering
//! - **initial_status**: mode and threat level shown before the status
//!   service publishes its first update

pub mod dashboard;
pub mod display;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::status::StatusSnapshot;

pub use dashboard::DashboardConfig;
pub use display::{DisplayConfig, StatusBadgeStyle};

/// Largest UTC offset accepted by `display.utc_offset_minutes`.
pub const MAX_UTC_OFFSET_MINUTES: i32 = 23 * 60 + 59;

/// Complete Aegis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AegisConfig {
    /// Dashboard server settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Component display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Status shown until the first update arrives.
    #[serde(default)]
    pub initial_status: StatusSnapshot,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AegisConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dashboard.host.trim().is_empty() {
            return Err(ConfigError::Config("dashboard.host must not be empty".into()));
        }
        if self.display.time_format.trim().is_empty() {
            return Err(ConfigError::Config(
                "display.time_format must not be empty".into(),
            ));
        }
        if StrftimeItems::new(&self.display.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Config(format!(
                "display.time_format is not a valid format string: {}",
                self.display.time_format
            )));
        }
        if self.display.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::Config(format!(
                "display.utc_offset_minutes must be within ±{MAX_UTC_OFFSET_MINUTES}, got {}",
                self.display.utc_offset_minutes
            )));
        }
        Ok(())
    }
}
