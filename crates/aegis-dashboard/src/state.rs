//! Dashboard application state.

use aegis_core::{AegisConfig, AuditLogRecord, DisplayConfig, StatusSnapshot};
use chrono::{DateTime, Utc};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared application state for the dashboard.
///
/// The status and audit records are pushed in by external services; request
/// handlers only ever read snapshots of them.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// The loaded configuration.
    config: AegisConfig,
    /// Latest status published by the status service.
    status: RwLock<StatusSnapshot>,
    /// Latest audit records published by the audit query service.
    records: RwLock<Vec<AuditLogRecord>>,
    /// Record of status badge activations.
    activations: RwLock<ActivationLog>,
}

/// Count and time of status badge activations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivationLog {
    pub count: u64,
    pub last: Option<DateTime<Utc>>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AegisConfig) -> Self {
        let status = config.initial_status;
        Self {
            inner: Arc::new(AppStateInner {
                config,
                status: RwLock::new(status),
                records: RwLock::new(Vec::new()),
                activations: RwLock::new(ActivationLog::default()),
            }),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AegisConfig {
        &self.inner.config
    }

    /// Get the display configuration.
    pub fn display(&self) -> &DisplayConfig {
        &self.inner.config.display
    }

    /// Current status.
    pub fn status(&self) -> StatusSnapshot {
        *self
            .inner
            .status
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current status.
    pub fn set_status(&self, status: StatusSnapshot) {
        *self
            .inner
            .status
            .write()
            .unwrap_or_else(PoisonError::into_inner) = status;
    }

    /// Copy of the current audit records.
    pub fn records(&self) -> Vec<AuditLogRecord> {
        self.inner
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the audit records.
    pub fn set_records(&self, records: Vec<AuditLogRecord>) {
        *self
            .inner
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner) = records;
    }

    /// Note a status badge activation.
    pub fn record_activation(&self) -> ActivationLog {
        let mut log = self
            .inner
            .activations
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        log.count += 1;
        log.last = Some(Utc::now());
        *log
    }

    /// Activation history so far.
    pub fn activations(&self) -> ActivationLog {
        *self
            .inner
            .activations
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
