//! `aegis render` - Print component HTML to stdout.

use aegis_core::{AuditLogRecord, DisplayConfig, SystemMode, ThreatLevel};
use aegis_dashboard::{AuditLogTable, StatusIndicator};
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Render the audit table from a JSON array of records.
///
/// While `loading`, the input is never read.
pub fn render_audit(input: Option<&Path>, loading: bool, display: &DisplayConfig) -> Result<String> {
    let records = if loading {
        Vec::new()
    } else {
        parse_records(&read_input(input)?)?
    };

    Ok(AuditLogTable::new(&records, loading)
        .display(display.clone())
        .render())
}

/// Render the status badge. Unrecognized values degrade to defaults.
pub fn render_status(mode: &str, threat: &str, animated: bool) -> String {
    let mode = SystemMode::parse(mode);
    let threat = ThreatLevel::parse(threat);
    if mode == SystemMode::Unknown {
        tracing::debug!("Unrecognized mode; rendering the unknown presentation");
    }

    StatusIndicator::new(mode)
        .threat_level(threat)
        .animated(animated)
        .render()
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read records from stdin")?;
            Ok(buf)
        }
    }
}

fn parse_records(content: &str) -> Result<Vec<AuditLogRecord>> {
    let value: Value = serde_json::from_str(content).context("records are not valid JSON")?;
    let Value::Array(items) = value else {
        bail!("expected a JSON array of audit records");
    };
    Ok(items.into_iter().map(AuditLogRecord::from_value).collect())
}
