//! `aegis serve` - Start the dashboard web server.

use aegis_dashboard::DashboardServer;
use anyhow::Result;
use std::path::Path;

use super::load_config;

pub async fn run(config_path: Option<&Path>, port: Option<u16>) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(port) = port {
        config.dashboard.port = port;
    }

    tracing::info!(
        mode = %config.initial_status.mode,
        threat_level = %config.initial_status.threat_level,
        refresh_interval_secs = config.dashboard.refresh_interval_secs,
        "Loaded dashboard configuration"
    );

    DashboardServer::new(config).run().await?;
    Ok(())
}
