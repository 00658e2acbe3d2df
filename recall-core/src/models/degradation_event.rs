use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A non-fatal condition where a subsystem kept running in a degraded state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub detail: String,
    pub timestamp: DateTime<Utc>,
}
