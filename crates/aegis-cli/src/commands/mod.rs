//! CLI command implementations for the Aegis dashboard.

pub mod check;
pub mod render;
pub mod serve;

use aegis_core::AegisConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Load and validate a config file, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<AegisConfig> {
    let config = match path {
        Some(path) => AegisConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AegisConfig::default(),
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}
