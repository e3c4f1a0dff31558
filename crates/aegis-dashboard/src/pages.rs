//! Page templates for dashboard views.

use aegis_core::{AuditLogRecord, DisplayConfig, StatusSnapshot};

use crate::components::status_indicator::STATUS_DETAIL_ID;
use crate::components::{AuditLogTable, StatusIndicator};
use crate::state::ActivationLog;
use crate::templates::{card, layout};

/// Where the status badge posts activations.
pub const ACTIVATE_URL: &str = "/api/status/activate";

// =============================================================================
// Home Page
// =============================================================================

/// The dashboard home page.
///
/// The audit table is first rendered in its loading state and swaps itself
/// for the real table once the fragment request completes.
pub fn home_page(status: StatusSnapshot, refresh_interval_secs: u64) -> String {
    let poll = if refresh_interval_secs > 0 {
        format!(
            r##" hx-get="/fragments/status" hx-trigger="every {refresh_interval_secs}s" hx-swap="innerHTML""##
        )
    } else {
        String::new()
    };

    let header = format!(
        r##"<div class="mb-8 flex items-center justify-between">
            <div>
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">Security Overview</h1>
                <p class="mt-2 text-gray-600 dark:text-gray-400">Live system mode and forensic audit trail.</p>
            </div>
            <div id="status-indicator"{poll}>
                {badge}
            </div>
        </div>
        <div id="{STATUS_DETAIL_ID}" class="mb-6"></div>"##,
        badge = status_fragment(status),
    );

    let audit = card(
        "Audit Logs",
        &format!(
            r##"<div id="audit-table" hx-get="/fragments/audit" hx-trigger="load" hx-swap="innerHTML">
                {skeleton}
            </div>"##,
            skeleton = AuditLogTable::new(&[], true).render(),
        ),
    );

    layout("Home", &format!("{header}\n{audit}"))
}

// =============================================================================
// Fragments
// =============================================================================

/// The status badge, wired to post activations back to the dashboard.
pub fn status_fragment(status: StatusSnapshot) -> String {
    StatusIndicator::new(status.mode)
        .threat_level(status.threat_level)
        .activate_url(ACTIVATE_URL)
        .render()
}

/// The audit table body swapped into the home page.
pub fn audit_fragment(records: &[AuditLogRecord], is_loading: bool, display: &DisplayConfig) -> String {
    AuditLogTable::new(records, is_loading)
        .display(display.clone())
        .render()
}

/// Details shown after the status badge is activated.
pub fn status_detail_fragment(indicator: &StatusIndicator, activations: ActivationLog) -> String {
    let resolved = indicator.presentation();
    let last = activations
        .last
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        r##"<div class="p-4 rounded-lg bg-gray-100 dark:bg-gray-800 text-sm text-gray-700 dark:text-gray-300">
            <dl class="grid grid-cols-2 gap-2">
                <dt class="font-medium">Mode</dt><dd><code>{mode}</code></dd>
                <dt class="font-medium">Threat level</dt><dd><code>{threat}</code></dd>
                <dt class="font-medium">Presentation</dt><dd>{label}</dd>
                <dt class="font-medium">Inspections</dt><dd>{count} (last {last})</dd>
            </dl>
        </div>"##,
        mode = indicator.mode(),
        threat = indicator.current_threat_level(),
        label = resolved.presentation.label,
        count = activations.count,
    )
}
