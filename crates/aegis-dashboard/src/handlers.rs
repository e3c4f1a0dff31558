//! Request handlers for the dashboard.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use aegis_core::{AuditLogRecord, StatusSnapshot};

use crate::components::StatusIndicator;
use crate::error::DashboardError;
use crate::pages;
use crate::state::AppState;

// =============================================================================
// Page Handlers (HTML responses)
// =============================================================================

/// Handler for the dashboard home page.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let refresh = state.config().dashboard.refresh_interval_secs;
    Html(pages::home_page(state.status(), refresh))
}

// =============================================================================
// Fragment Handlers (HTMX responses)
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct AuditFragmentParams {
    /// Force the loading skeleton.
    #[serde(default)]
    pub loading: bool,
}

/// Handler for the audit table fragment.
pub async fn audit_fragment(
    State(state): State<AppState>,
    Query(params): Query<AuditFragmentParams>,
) -> Html<String> {
    let records = state.records();
    Html(pages::audit_fragment(&records, params.loading, state.display()))
}

/// Handler for the status badge fragment.
pub async fn status_fragment(State(state): State<AppState>) -> Html<String> {
    Html(pages::status_fragment(state.status()))
}

/// Handler for a click on the status badge.
pub async fn activate_status(State(state): State<AppState>) -> Html<String> {
    let status = state.status();
    let recorder = state.clone();
    let indicator = StatusIndicator::new(status.mode)
        .threat_level(status.threat_level)
        .on_activate(move || {
            let log = recorder.record_activation();
            tracing::info!(count = log.count, "Status badge inspected");
        });

    indicator.activate();
    Html(pages::status_detail_fragment(&indicator, state.activations()))
}

// =============================================================================
// API Handlers (JSON)
// =============================================================================

/// Handler for status updates from the status service.
pub async fn update_status(
    State(state): State<AppState>,
    Json(status): Json<StatusSnapshot>,
) -> StatusCode {
    tracing::info!(
        mode = %status.mode,
        threat_level = %status.threat_level,
        "System status updated"
    );
    state.set_status(status);
    StatusCode::NO_CONTENT
}

/// Handler replacing the audit records with a new batch.
pub async fn replace_audit(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<StatusCode, DashboardError> {
    let Value::Array(items) = body else {
        return Err(DashboardError::InvalidRequest(
            "expected a JSON array of audit records".to_string(),
        ));
    };

    let records: Vec<AuditLogRecord> = items.into_iter().map(AuditLogRecord::from_value).collect();
    tracing::debug!(count = records.len(), "Audit records replaced");
    state.set_records(records);
    Ok(StatusCode::NO_CONTENT)
}

/// Liveness probe.
pub async fn healthz() -> Json<Value> {
    Json(json!({ "ok": true, "service": "aegis-dashboard" }))
}
