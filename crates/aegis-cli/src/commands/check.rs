//! `aegis check` command implementation.
//!
//! Loads a configuration file, validates it, and reports the effective
//! settings with defaults filled in.

use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

use aegis_core::AegisConfig;

/// Outcome of a successful check.
#[derive(Debug)]
pub struct CheckReport {
    pub config: AegisConfig,
    pub warnings: Vec<String>,
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration OK")?;
        for warning in &self.warnings {
            writeln!(f, "WARN: {warning}")?;
        }
        let effective = serde_yaml::to_string(&self.config).map_err(|_| fmt::Error)?;
        writeln!(f, "\nEffective configuration:\n{effective}")
    }
}

pub fn run(path: &Path) -> Result<CheckReport> {
    let config = AegisConfig::from_file(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    config.validate().context("invalid configuration")?;

    let mut warnings = Vec::new();
    if config.dashboard.refresh_interval_secs == 0 {
        warnings.push("dashboard.refresh_interval_secs is 0; the status badge will not refresh".to_string());
    }
    if config.dashboard.host == "0.0.0.0" {
        warnings.push("dashboard listens on all interfaces".to_string());
    }
    if config.initial_status.mode == aegis_core::SystemMode::Unknown {
        warnings.push("initial_status.mode is not set or not recognized".to_string());
    }

    Ok(CheckReport { config, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_check_valid_config() {
        let file = write_config("initial_status:\n  mode: conscious\n");
        let report = run(file.path()).unwrap();
        assert!(report.warnings.is_empty());
        let text = report.to_string();
        assert!(text.starts_with("Configuration OK"));
        assert!(text.contains("mode: conscious"));
    }

    #[test]
    fn test_check_warnings() {
        let file = write_config("dashboard:\n  host: 0.0.0.0\n  refresh_interval_secs: 0\n");
        let report = run(file.path()).unwrap();
        assert_eq!(report.warnings.len(), 3);
    }

    #[test]
    fn test_check_invalid_offset() {
        let file = write_config("display:\n  utc_offset_minutes: 5000\n");
        let err = run(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("utc_offset_minutes"));
    }

    #[test]
    fn test_check_missing_file() {
        assert!(run(Path::new("/definitely/not/here.yaml")).is_err());
    }
}
