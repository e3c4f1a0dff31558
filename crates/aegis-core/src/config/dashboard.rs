//! Dashboard configuration.
//!
//! This module defines where the dashboard web UI listens and how often the
//! page refreshes its live fragments.

use serde::{Deserialize, Serialize};

/// Configuration for the dashboard server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Host to bind the dashboard to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Seconds between status badge refreshes in the browser. 0 disables
    /// polling.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl DashboardConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_refresh_interval_secs() -> u64 {
    5
}
