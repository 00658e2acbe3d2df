use crate::errors::RecallResult;
use crate::models::{IncidentDraft, IncidentRecord, MatchResult, TagFilter};

/// Durable collection of incident records.
///
/// Append-only: there is no update or delete. Implementations must tolerate
/// concurrent `insert` calls without losing writes.
pub trait IIncidentStorage: Send + Sync {
    /// Persist an incident, assigning `id` and `timestamp` when absent.
    fn insert(&self, draft: IncidentDraft) -> RecallResult<IncidentRecord>;

    /// Every decodable record, in no particular order.
    fn scan_all(&self) -> RecallResult<Vec<IncidentRecord>>;

    fn get_by_id(&self, id: &str) -> RecallResult<Option<IncidentRecord>>;

    fn count(&self) -> RecallResult<usize>;

    /// Embedding dimension D every record must have.
    fn dimensions(&self) -> usize;

    fn backend_name(&self) -> &str;

    /// The store's native nearest-neighbor path, if it has one.
    fn as_vector_index(&self) -> Option<&dyn IVectorIndex> {
        None
    }
}

/// Fused tag-filter + nearest-neighbor query.
///
/// The filter is a predicate inside the query, so the top-k is taken over
/// the filtered subset rather than the whole collection.
pub trait IVectorIndex: Send + Sync {
    fn query_knn(
        &self,
        query: &[f32],
        filter: &TagFilter,
        k: usize,
    ) -> RecallResult<Vec<MatchResult>>;
}
