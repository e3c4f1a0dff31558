//! Route definitions for the dashboard.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the dashboard router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/fragments/audit", get(handlers::audit_fragment))
        .route("/fragments/status", get(handlers::status_fragment))
        .route("/api/status", put(handlers::update_status))
        .route("/api/status/activate", post(handlers::activate_status))
        .route("/api/audit", put(handlers::replace_audit))
        .route("/healthz", get(handlers::healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
