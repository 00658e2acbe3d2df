use serde::{Deserialize, Serialize};

use super::IncidentRecord;

/// Exact-match pre-filter over the incident tags.
///
/// Comparison is byte-for-byte and case-sensitive. It is a hard predicate,
/// never a ranking signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagFilter {
    pub service: String,
    pub environment: String,
}

impl TagFilter {
    pub fn new(service: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            environment: environment.into(),
        }
    }

    pub fn matches(&self, record: &IncidentRecord) -> bool {
        record.service == self.service && record.environment == self.environment
    }
}
