use serde::{Deserialize, Serialize};

/// Overall health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    /// Serving, but degradation events are pending.
    Degraded,
}

/// Snapshot of the running engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub store_backend: String,
    pub incident_count: usize,
    pub embedding_provider: String,
    pub dimensions: usize,
    pub pending_degradation_events: usize,
}
