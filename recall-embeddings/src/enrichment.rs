//! Canonical embedding input.
//!
//! Ingestion joins `description | service | environment | rootCauseSummary`.
//! Queries join the fields they have in the same order with the same
//! separator, so both sides land in the same embedding space.

use recall_core::constants::EMBEDDING_FIELD_SEPARATOR;

/// Embedding input for a resolved incident.
pub fn incident_text(
    description: &str,
    service: &str,
    environment: &str,
    root_cause_summary: &str,
) -> String {
    [description, service, environment, root_cause_summary].join(EMBEDDING_FIELD_SEPARATOR)
}

/// Embedding input for a diagnosis query.
pub fn query_text(description: &str, service: &str, environment: &str) -> String {
    [description, service, environment].join(EMBEDDING_FIELD_SEPARATOR)
}
