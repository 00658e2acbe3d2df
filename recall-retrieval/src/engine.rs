//! RetrievalEngine: picks the store's fused KNN path when available,
//! otherwise scans and ranks in process.

use recall_core::config::RetrievalConfig;
use recall_core::errors::RecallResult;
use recall_core::models::{MatchResult, TagFilter};
use recall_core::traits::IIncidentStorage;
use tracing::debug;

use crate::search;

/// Top-k retrieval over an incident store.
pub struct RetrievalEngine<'a> {
    storage: &'a dyn IIncidentStorage,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(storage: &'a dyn IIncidentStorage, config: RetrievalConfig) -> Self {
        Self { storage, config }
    }

    /// Top `default_limit` matches for `query` under `filter`.
    pub fn find_similar(&self, query: &[f32], filter: &TagFilter) -> RecallResult<Vec<MatchResult>> {
        self.find_similar_with_limit(query, filter, self.config.default_limit)
    }

    /// Store errors propagate; an empty result is not an error.
    pub fn find_similar_with_limit(
        &self,
        query: &[f32],
        filter: &TagFilter,
        limit: usize,
    ) -> RecallResult<Vec<MatchResult>> {
        let native = if self.config.use_native_index {
            self.storage.as_vector_index()
        } else {
            None
        };

        let matches = match native {
            Some(index) => index.query_knn(query, filter, limit)?,
            None => {
                let records = self.storage.scan_all()?;
                search::find_similar(query, filter, &records, limit)
            }
        };

        debug!(
            backend = self.storage.backend_name(),
            native = native.is_some(),
            service = %filter.service,
            environment = %filter.environment,
            returned = matches.len(),
            top_similarity = matches.first().map(|m| m.similarity),
            "retrieval complete"
        );
        Ok(matches)
    }
}
