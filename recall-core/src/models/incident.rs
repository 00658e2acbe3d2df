use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A resolved incident as persisted by the store.
///
/// Immutable once created: a corrected fix is recorded as a new incident.
/// `embedding` is computed once at ingestion and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    /// UUID v4 identifier, assigned by the store.
    pub id: String,
    /// Error or symptom text.
    pub description: String,
    /// Exact-match tag.
    pub service: String,
    /// Exact-match tag.
    pub environment: String,
    /// What was ultimately found to be wrong.
    pub root_cause_summary: String,
    /// Stored remediation, if one was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_diff: Option<String>,
    /// Fixed-length vector of the store's dimension D.
    pub embedding: Vec<f32>,
    /// Creation time. Informational only, never used for ranking.
    pub timestamp: DateTime<Utc>,
}

/// An incident on its way into the store.
///
/// `id` and `timestamp` are assigned on insert when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub description: String,
    pub service: String,
    pub environment: String,
    pub root_cause_summary: String,
    #[serde(default)]
    pub patch_diff: Option<String>,
    pub embedding: Vec<f32>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl IncidentDraft {
    pub fn new(
        description: impl Into<String>,
        service: impl Into<String>,
        environment: impl Into<String>,
        root_cause_summary: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            service: service.into(),
            environment: environment.into(),
            root_cause_summary: root_cause_summary.into(),
            patch_diff: None,
            embedding,
            timestamp: None,
        }
    }

    pub fn with_patch_diff(mut self, patch_diff: Option<String>) -> Self {
        self.patch_diff = patch_diff;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Finalize into a record, filling in a fresh id and the current time.
    pub fn into_record(self) -> IncidentRecord {
        IncidentRecord {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            description: self.description,
            service: self.service,
            environment: self.environment,
            root_cause_summary: self.root_cause_summary,
            patch_diff: self.patch_diff,
            embedding: self.embedding,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

/// Listing view of an incident: everything except the vector itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentListing {
    pub id: String,
    pub description: String,
    pub service: String,
    pub environment: String,
    pub root_cause_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_diff: Option<String>,
    pub timestamp: DateTime<Utc>,
    /// Length of the stored embedding.
    pub dimensions: usize,
}

impl From<&IncidentRecord> for IncidentListing {
    fn from(record: &IncidentRecord) -> Self {
        Self {
            id: record.id.clone(),
            description: record.description.clone(),
            service: record.service.clone(),
            environment: record.environment.clone(),
            root_cause_summary: record.root_cause_summary.clone(),
            patch_diff: record.patch_diff.clone(),
            timestamp: record.timestamp,
            dimensions: record.embedding.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_assigns_id_and_timestamp() {
        let record = IncidentDraft::new("boom", "payments", "prod", "null deref", vec![1.0])
            .into_record();
        assert!(uuid::Uuid::parse_str(&record.id).is_ok());
        assert!(record.timestamp <= Utc::now());
    }

    #[test]
    fn draft_keeps_explicit_id() {
        let record = IncidentDraft::new("boom", "payments", "prod", "null deref", vec![1.0])
            .with_id("fixed-id")
            .into_record();
        assert_eq!(record.id, "fixed-id");
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = IncidentDraft::new("boom", "payments", "prod", "null deref", vec![0.5])
            .with_patch_diff(Some("+ guard".to_string()))
            .into_record();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["rootCauseSummary"], "null deref");
        assert_eq!(json["patchDiff"], "+ guard");
    }

    #[test]
    fn listing_drops_vector_but_keeps_length() {
        let record =
            IncidentDraft::new("boom", "payments", "prod", "x", vec![0.0; 8]).into_record();
        let listing = IncidentListing::from(&record);
        assert_eq!(listing.dimensions, 8);
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("embedding").is_none());
    }
}
