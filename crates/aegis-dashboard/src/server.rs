//! Dashboard server implementation.

use aegis_core::AegisConfig;
use crate::error::DashboardError;
use crate::routes;
use crate::state::AppState;
use tokio::net::TcpListener;

/// The dashboard server.
pub struct DashboardServer {
    state: AppState,
}

impl DashboardServer {
    /// Create a new dashboard server with the given configuration.
    pub fn new(config: AegisConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }

    /// Shared state, for publishing status and audit records in-process.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Start the dashboard server and run until Ctrl-C.
    pub async fn run(&self) -> Result<(), DashboardError> {
        let addr = self.state.config().dashboard.bind_address();
        tracing::info!(address = %addr, "Starting Aegis dashboard");

        let app = routes::create_router(self.state.clone());

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DashboardError::StartupFailed(e.to_string()))?;

        tracing::info!("Aegis dashboard stopped");
        Ok(())
    }

    /// Get the configured listen port.
    pub fn listen_port(&self) -> u16 {
        self.state.config().dashboard.port
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = DashboardServer::new(AegisConfig::default());
        assert_eq!(server.listen_port(), 8080);
    }
}
