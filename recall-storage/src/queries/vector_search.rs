//! Tag-filtered nearest-neighbor search.
//!
//! The service/environment predicate is bound into the SELECT, so only the
//! filtered subset is decoded and scored. Scoring uses the same
//! `cosine_similarity` as the scan path, which keeps both paths in agreement.

use rusqlite::{params, Connection};

use recall_core::errors::RecallResult;
use recall_core::models::{MatchResult, TagFilter};
use recall_core::similarity::cosine_similarity;

use super::incident_crud::{RawIncidentRow, SELECT_COLUMNS};
use crate::to_storage_err;

/// Top `k` incidents under `filter`, by cosine similarity descending.
pub fn query_knn(
    conn: &Connection,
    query: &[f32],
    filter: &TagFilter,
    k: usize,
) -> RecallResult<Vec<MatchResult>> {
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut stmt = conn
        .prepare_cached(&format!(
            "SELECT {SELECT_COLUMNS} FROM incidents WHERE service = ?1 AND environment = ?2"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(
            params![filter.service, filter.environment],
            RawIncidentRow::read_record,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut scored = Vec::new();
    for row in rows {
        match row.map_err(|e| to_storage_err(e.to_string()))? {
            Ok(record) => {
                let similarity = cosine_similarity(query, &record.embedding);
                scored.push(MatchResult::new(record, similarity));
            }
            Err(e) => tracing::warn!(error = %e, "skipping undecodable incident row in knn"),
        }
    }

    scored.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    scored.truncate(k);
    Ok(scored)
}
