//! Audit log table.
//!
//! Renders a slice of [`AuditLogRecord`]s as a five-column table. While the
//! host is still loading, a fixed number of skeleton rows is shown instead
//! and the records are ignored.

use std::fmt::Write;

use aegis_core::record::DEFAULT_STATUS;
use aegis_core::{AuditLogRecord, DisplayConfig, StatusBadgeStyle};

use crate::templates::{badge, html_escape, table, truncate_chars};

/// Placeholder rows shown while loading.
pub const SKELETON_ROWS: usize = 3;

/// Characters of `details` kept in the table.
pub const DETAILS_MAX_CHARS: usize = 40;

/// Column headers, in render order.
pub const COLUMNS: [&str; 5] = ["Timestamp", "Action", "Actor", "Status", "Details"];

/// Shown in the timestamp column when there is nothing to format.
pub const MISSING_TIMESTAMP: &str = "N/A";

pub const EMPTY_MESSAGE: &str = "No audit logs found";

const CELL_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-gray-900 dark:text-gray-100";

/// Table of audit log records.
#[derive(Debug, Clone)]
pub struct AuditLogTable<'a> {
    records: &'a [AuditLogRecord],
    is_loading: bool,
    display: DisplayConfig,
}

impl<'a> AuditLogTable<'a> {
    pub fn new(records: &'a [AuditLogRecord], is_loading: bool) -> Self {
        Self {
            records,
            is_loading,
            display: DisplayConfig::default(),
        }
    }

    /// Override timestamp and status column formatting.
    pub fn display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// Render the table.
    pub fn render(&self) -> String {
        let body = if self.is_loading {
            skeleton_rows()
        } else if self.records.is_empty() {
            empty_row()
        } else {
            self.records
                .iter()
                .map(|record| self.record_row(record))
                .collect()
        };

        table(&COLUMNS, &body)
    }

    fn record_row(&self, record: &AuditLogRecord) -> String {
        format!(
            r##"<tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50" data-row="record">
                <td class="{CELL_CLASS} text-gray-500 dark:text-gray-400" data-col="timestamp">{timestamp}</td>
                <td class="{CELL_CLASS}" data-col="action">{action}</td>
                <td class="{CELL_CLASS}" data-col="actor">{actor}</td>
                <td class="{CELL_CLASS}" data-col="status">{status}</td>
                <td class="{CELL_CLASS} font-mono text-gray-500 dark:text-gray-400" data-col="details">{details}</td>
            </tr>"##,
            timestamp = html_escape(&format_timestamp(record, &self.display)),
            action = html_escape(record.action()),
            actor = html_escape(record.actor()),
            status = status_badge(record, self.display.status_badge),
            details = html_escape(&truncate_details(record.details())),
        )
    }
}

/// Time of day for the record's timestamp, or `N/A`.
pub fn format_timestamp(record: &AuditLogRecord, display: &DisplayConfig) -> String {
    let Some(ts) = record.parsed_timestamp() else {
        return MISSING_TIMESTAMP.to_string();
    };

    let mut out = String::new();
    // An unusable format string surfaces as fmt::Error rather than a panic.
    match write!(out, "{}", ts.with_timezone(&display.offset()).format(&display.time_format)) {
        Ok(()) => out,
        Err(_) => MISSING_TIMESTAMP.to_string(),
    }
}

/// Keep the first [`DETAILS_MAX_CHARS`] characters.
pub fn truncate_details(details: &str) -> String {
    truncate_chars(details, DETAILS_MAX_CHARS)
}

/// Status column badge.
///
/// With [`StatusBadgeStyle::Fixed`] every row reads "SUCCESS" in the success
/// style regardless of the record's status.
pub fn status_badge(record: &AuditLogRecord, style: StatusBadgeStyle) -> String {
    match style {
        StatusBadgeStyle::Fixed => badge(DEFAULT_STATUS, "green"),
        StatusBadgeStyle::ByValue => {
            let status = record.status();
            badge(&html_escape(status), status_color(status))
        }
    }
}

fn status_color(status: &str) -> &'static str {
    match status.to_ascii_uppercase().as_str() {
        "SUCCESS" | "OK" | "COMPLETED" => "green",
        "FAILED" | "FAILURE" | "ERROR" => "red",
        "PENDING" | "RUNNING" => "yellow",
        "WARNING" => "orange",
        _ => "gray",
    }
}

fn skeleton_rows() -> String {
    const WIDTHS: [&str; 5] = ["w-20", "w-32", "w-28", "w-16", "w-48"];

    let cells: String = WIDTHS
        .iter()
        .map(|w| {
            format!(
                r#"<td class="px-6 py-4"><div class="h-4 {w} bg-gray-200 dark:bg-gray-700 rounded"></div></td>"#
            )
        })
        .collect();

    (0..SKELETON_ROWS)
        .map(|_| format!(r#"<tr class="animate-pulse" data-row="skeleton">{cells}</tr>"#))
        .collect()
}

fn empty_row() -> String {
    format!(
        r#"<tr data-row="empty"><td colspan="{cols}" class="px-6 py-8 text-center text-sm text-gray-500 dark:text-gray-400">{EMPTY_MESSAGE}</td></tr>"#,
        cols = COLUMNS.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn records(values: Vec<Value>) -> Vec<AuditLogRecord> {
        values.into_iter().map(AuditLogRecord::from_value).collect()
    }

    /// Text of every cell tagged with `data-col="{col}"`.
    fn cells<'h>(html: &'h str, col: &str) -> Vec<&'h str> {
        let marker = format!(r#"data-col="{col}">"#);
        html.match_indices(&marker)
            .map(|(idx, _)| {
                let rest = &html[idx + marker.len()..];
                &rest[..rest.find("</td>").unwrap()]
            })
            .collect()
    }

    fn row_count(html: &str, kind: &str) -> usize {
        html.matches(&format!(r#"data-row="{kind}""#)).count()
    }

    #[test]
    fn test_loading_renders_three_skeleton_rows() {
        let logs = records(vec![json!({"action": "SECRET-ACTION", "actor": "mallory"})]);
        let html = AuditLogTable::new(&logs, true).render();

        assert_eq!(row_count(&html, "skeleton"), 3);
        assert_eq!(row_count(&html, "record"), 0);
        assert_eq!(row_count(&html, "empty"), 0);
        assert!(html.contains("animate-pulse"));
        assert!(!html.contains("SECRET-ACTION"));
        assert!(!html.contains("mallory"));
    }

    #[test]
    fn test_loading_with_empty_list_still_shows_skeleton() {
        let html = AuditLogTable::new(&[], true).render();
        assert_eq!(row_count(&html, "skeleton"), 3);
        assert!(!html.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_empty_list_renders_single_message_row() {
        let html = AuditLogTable::new(&[], false).render();
        assert_eq!(row_count(&html, "empty"), 1);
        assert_eq!(row_count(&html, "record"), 0);
        assert!(html.contains(r#"colspan="5""#));
        assert!(html.contains("No audit logs found"));
    }

    #[test]
    fn test_headers() {
        let html = AuditLogTable::new(&[], false).render();
        for header in COLUMNS {
            assert!(html.contains(&format!(">{header}</th>")));
        }
    }

    #[test]
    fn test_scenario_row() {
        let logs = records(vec![json!({
            "timestamp": "2024-01-01T10:00:00Z",
            "action": "scan",
            "actor": "alice",
            "status": "FAILED",
            "details": "x".repeat(50),
        })]);
        let html = AuditLogTable::new(&logs, false).render();

        assert_eq!(row_count(&html, "record"), 1);
        assert_eq!(cells(&html, "timestamp"), vec!["10:00:00 AM"]);
        assert_eq!(cells(&html, "action"), vec!["scan"]);
        assert_eq!(cells(&html, "actor"), vec!["alice"]);
        assert_eq!(cells(&html, "details"), vec!["x".repeat(40)]);

        let status = cells(&html, "status")[0];
        assert!(status.contains(">SUCCESS</span>"));
        assert!(status.contains("bg-green-100"));
        assert!(!status.contains("FAILED"));
    }

    #[test]
    fn test_rows_keep_input_order() {
        let logs = records(vec![
            json!({"action": "third", "timestamp": "2024-01-03T00:00:00Z"}),
            json!({"action": "first", "timestamp": "2024-01-01T00:00:00Z"}),
            json!({"action": "second", "timestamp": "2024-01-02T00:00:00Z"}),
        ]);
        let html = AuditLogTable::new(&logs, false).render();
        assert_eq!(cells(&html, "action"), vec!["third", "first", "second"]);
    }

    #[test]
    fn test_missing_or_malformed_fields_use_defaults() {
        let logs = records(vec![
            json!({}),
            json!({"timestamp": 1704103200, "action": 7, "actor": [], "details": null}),
        ]);
        let html = AuditLogTable::new(&logs, false).render();

        assert_eq!(cells(&html, "timestamp"), vec!["N/A", "N/A"]);
        assert_eq!(cells(&html, "action"), vec!["Evidence Collected"; 2]);
        assert_eq!(cells(&html, "actor"), vec!["forensics@system"; 2]);
        assert_eq!(cells(&html, "details"), vec!["Hash: N/A"; 2]);
    }

    #[test]
    fn test_unparseable_timestamp_is_na() {
        let logs = records(vec![json!({"timestamp": "not a date"})]);
        let html = AuditLogTable::new(&logs, false).render();
        assert_eq!(cells(&html, "timestamp"), vec!["N/A"]);
    }

    #[test]
    fn test_short_details_untouched() {
        let logs = records(vec![json!({"details": "Hash: 9f86d081"})]);
        let html = AuditLogTable::new(&logs, false).render();
        assert_eq!(cells(&html, "details"), vec!["Hash: 9f86d081"]);
    }

    #[test]
    fn test_details_truncated_by_characters_then_escaped() {
        let details = format!("{}<script>", "é".repeat(38));
        let logs = records(vec![json!({ "details": details })]);
        let html = AuditLogTable::new(&logs, false).render();

        let expected = format!("{}&lt;s", "é".repeat(38));
        assert_eq!(cells(&html, "details"), vec![expected.as_str()]);
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_display_offset_and_format() {
        let logs = records(vec![json!({"timestamp": "2024-01-01T10:00:00Z"})]);
        let display = DisplayConfig {
            time_format: "%H:%M".into(),
            utc_offset_minutes: 90,
            ..DisplayConfig::default()
        };
        let html = AuditLogTable::new(&logs, false).display(display).render();
        assert_eq!(cells(&html, "timestamp"), vec!["11:30"]);
    }

    #[test]
    fn test_bad_time_format_degrades() {
        let logs = records(vec![json!({"timestamp": "2024-01-01T10:00:00Z"})]);
        let display = DisplayConfig {
            time_format: "%Q".into(),
            ..DisplayConfig::default()
        };
        let html = AuditLogTable::new(&logs, false).display(display).render();
        assert_eq!(cells(&html, "timestamp"), vec!["N/A"]);
    }

    #[test]
    fn test_status_by_value() {
        let logs = records(vec![
            json!({"status": "FAILED"}),
            json!({}),
            json!({"status": "queued"}),
        ]);
        let display = DisplayConfig {
            status_badge: StatusBadgeStyle::ByValue,
            ..DisplayConfig::default()
        };
        let html = AuditLogTable::new(&logs, false).display(display).render();
        let status = cells(&html, "status");

        assert!(status[0].contains(">FAILED</span>") && status[0].contains("bg-red-100"));
        assert!(status[1].contains(">SUCCESS</span>") && status[1].contains("bg-green-100"));
        assert!(status[2].contains(">queued</span>") && status[2].contains("bg-gray-100"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let logs = records(vec![json!({"action": "scan", "timestamp": "2024-01-01"})]);
        let table = AuditLogTable::new(&logs, false);
        assert_eq!(table.render(), table.render());
    }
}
