use serde::{Deserialize, Serialize};

use super::IncidentRecord;

/// A stored incident scored against a query vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub incident: IncidentRecord,
    /// Cosine similarity in [-1, 1].
    pub similarity: f64,
    /// Cosine distance, `1 - similarity`.
    pub distance: f64,
}

impl MatchResult {
    pub fn new(incident: IncidentRecord, similarity: f64) -> Self {
        Self {
            incident,
            similarity,
            distance: 1.0 - similarity,
        }
    }
}
