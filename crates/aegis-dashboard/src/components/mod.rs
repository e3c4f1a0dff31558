//! Presentational components.
//!
//! Each component is a pure mapping from its inputs to an HTML fragment.
//! Components never fetch data or mutate their inputs; the host supplies
//! already-shaped values and embeds the returned markup.

pub mod audit_log;
pub mod status_indicator;

pub use audit_log::AuditLogTable;
pub use status_indicator::{Presentation, PulsePolicy, StatusIndicator};
