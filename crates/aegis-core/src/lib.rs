//! # aegis-core
//!
//! Shared types for the Aegis security dashboard:
//!
//! - [`SystemMode`] and [`ThreatLevel`], the inputs published by the
//!   system-status service.
//! - [`AuditLogRecord`], a loosely typed audit entry with defensive field
//!   accessors.
//! - [`AegisConfig`], the YAML configuration shared by the dashboard and CLI.

pub mod config;
pub mod record;
pub mod status;

pub use config::{AegisConfig, ConfigError, DashboardConfig, DisplayConfig, StatusBadgeStyle};
pub use record::AuditLogRecord;
pub use status::{StatusSnapshot, SystemMode, ThreatLevel};
