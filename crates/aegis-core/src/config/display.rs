//! Display configuration for rendered components.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// How the audit table renders its status column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StatusBadgeStyle {
    /// Always a "SUCCESS" badge in the success style, whatever the record
    /// says. This is the long-standing dashboard behavior.
    #[default]
    Fixed,
    /// Show the record's own status and color it by value.
    ByValue,
}

/// Configuration for how component output is formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string for the audit table's time-of-day column.
    #[serde(default = "default_time_format")]
    pub time_format: String,

    /// Fixed UTC offset, in minutes, applied before formatting timestamps.
    #[serde(default)]
    pub utc_offset_minutes: i32,

    /// Status column rendering.
    #[serde(default)]
    pub status_badge: StatusBadgeStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time_format: default_time_format(),
            utc_offset_minutes: 0,
            status_badge: StatusBadgeStyle::default(),
        }
    }
}

impl DisplayConfig {
    /// The configured offset, or UTC when it is out of range.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

fn default_time_format() -> String {
    "%-I:%M:%S %p".to_string()
}
