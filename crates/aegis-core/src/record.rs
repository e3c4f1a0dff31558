//! Loosely typed audit log records.
//!
//! Records arrive from the audit query service as arbitrary JSON objects.
//! Nothing about their shape is enforced; each recognized field is read
//! through an accessor that type-checks the value and substitutes a default
//! when it is missing or not a string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_ACTION: &str = "Evidence Collected";
pub const DEFAULT_ACTOR: &str = "forensics@system";
pub const DEFAULT_STATUS: &str = "SUCCESS";
pub const DEFAULT_DETAILS: &str = "Hash: N/A";

/// An opaque audit log entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditLogRecord {
    fields: Map<String, Value>,
}

impl AuditLogRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap an arbitrary JSON value. Anything other than an object yields an
    /// empty record, so every field falls back to its default.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Raw access to the underlying fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A field's value if it is present and a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.get_str("timestamp")
    }

    /// The timestamp parsed into UTC, if present and well-formed.
    pub fn parsed_timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp().and_then(parse_timestamp)
    }

    pub fn action(&self) -> &str {
        self.get_str("action").unwrap_or(DEFAULT_ACTION)
    }

    pub fn actor(&self) -> &str {
        self.get_str("actor").unwrap_or(DEFAULT_ACTOR)
    }

    pub fn status(&self) -> &str {
        self.get_str("status").unwrap_or(DEFAULT_STATUS)
    }

    pub fn details(&self) -> &str {
        self.get_str("details").unwrap_or(DEFAULT_DETAILS)
    }
}

impl From<Map<String, Value>> for AuditLogRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// Parse a timestamp string.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC) and a
/// bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    fn record(value: Value) -> AuditLogRecord {
        AuditLogRecord::from_value(value)
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let r = record(json!({}));
        assert_eq!(r.timestamp(), None);
        assert_eq!(r.action(), "Evidence Collected");
        assert_eq!(r.actor(), "forensics@system");
        assert_eq!(r.status(), "SUCCESS");
        assert_eq!(r.details(), "Hash: N/A");
    }

    #[test]
    fn test_defaults_when_fields_have_wrong_type() {
        let r = record(json!({
            "timestamp": 1704103200,
            "action": ["scan"],
            "actor": null,
            "status": false,
            "details": {"hash": "abc"}
        }));
        assert_eq!(r.timestamp(), None);
        assert_eq!(r.action(), DEFAULT_ACTION);
        assert_eq!(r.actor(), DEFAULT_ACTOR);
        assert_eq!(r.status(), DEFAULT_STATUS);
        assert_eq!(r.details(), DEFAULT_DETAILS);
    }

    #[test]
    fn test_string_fields_pass_through() {
        let r = record(json!({"action": "scan", "actor": "alice", "status": "FAILED"}));
        assert_eq!(r.action(), "scan");
        assert_eq!(r.actor(), "alice");
        assert_eq!(r.status(), "FAILED");
    }

    #[test]
    fn test_non_object_value_is_empty_record() {
        let r = record(json!("not a record"));
        assert!(r.fields().is_empty());
        assert_eq!(r.action(), DEFAULT_ACTION);
    }

    #[test]
    fn test_parse_timestamp_forms() {
        let rfc = parse_timestamp("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(rfc.hour(), 10);

        let offset = parse_timestamp("2024-01-01T12:30:00+02:00").unwrap();
        assert_eq!((offset.hour(), offset.minute()), (10, 30));

        let naive = parse_timestamp("2024-01-01T08:15:00.250").unwrap();
        assert_eq!(naive.hour(), 8);

        let date = parse_timestamp("2024-01-01").unwrap();
        assert_eq!(date.hour(), 0);

        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_record_deserializes_transparently() {
        let r: AuditLogRecord =
            serde_json::from_str(r#"{"actor": "bob", "extra": 1}"#).unwrap();
        assert_eq!(r.actor(), "bob");
        assert_eq!(r.fields().len(), 2);
    }
}
