//! # aegis-dashboard
//!
//! Web dashboard for the Aegis security monitor.
//!
//! This crate provides:
//! - [`components::AuditLogTable`]: renders audit log records as a table,
//!   with a pulsing skeleton while data loads
//! - [`components::StatusIndicator`]: a badge derived from the system mode
//!   and threat level
//! - An axum host that serves both as HTMX fragments
//!
//! ## Tech Stack
//!
//! - Axum for HTTP server
//! - Server-rendered HTML fragments
//! - HTMX for partial refreshes (minimal JS)
//! - Tailwind CSS for styling

pub mod components;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use components::{AuditLogTable, StatusIndicator};
pub use error::DashboardError;
pub use server::DashboardServer;
pub use state::AppState;
