//! StorageEngine: owns the ConnectionPool and implements `IIncidentStorage`
//! and `IVectorIndex`.

use std::path::Path;

use recall_core::config::StorageConfig;
use recall_core::errors::RecallResult;
use recall_core::models::{IncidentDraft, IncidentRecord, MatchResult, TagFilter};
use recall_core::traits::{IIncidentStorage, IVectorIndex};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{incident_crud, vector_search};
use crate::validate_draft;

/// SQLite-backed incident store.
pub struct StorageEngine {
    pool: ConnectionPool,
    dimensions: usize,
}

impl StorageEngine {
    /// Open a file-backed store and run pending migrations.
    pub fn open(path: &Path, dimensions: usize, config: &StorageConfig) -> RecallResult<Self> {
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool, dimensions };
        engine.initialize()?;
        tracing::info!(path = %path.display(), dimensions, "opened sqlite incident store");
        Ok(engine)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory(dimensions: usize) -> RecallResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
            dimensions,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> RecallResult<()> {
        let dimensions = self.dimensions;
        self.pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            match incident_crud::stored_dimensions(conn)? {
                Some(stored) if stored != dimensions => {
                    tracing::warn!(
                        stored,
                        configured = dimensions,
                        "store was created with a different embedding dimension; \
                         existing rows will score 0 against new queries"
                    );
                }
                Some(_) => {}
                None => incident_crud::init_dimensions(conn, dimensions)?,
            }
            Ok(())
        })
    }

    /// Raw pool access for maintenance and tests.
    #[doc(hidden)]
    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }
}

impl IIncidentStorage for StorageEngine {
    fn insert(&self, draft: IncidentDraft) -> RecallResult<IncidentRecord> {
        validate_draft(&draft, self.dimensions)?;
        let record = draft.into_record();
        self.pool
            .writer
            .with_conn(|conn| incident_crud::insert_incident(conn, &record))?;
        tracing::debug!(id = %record.id, service = %record.service, "incident persisted");
        Ok(record)
    }

    fn scan_all(&self) -> RecallResult<Vec<IncidentRecord>> {
        self.pool.with_reader(incident_crud::scan_incidents)
    }

    fn get_by_id(&self, id: &str) -> RecallResult<Option<IncidentRecord>> {
        self.pool.with_reader(|conn| incident_crud::get_incident(conn, id))
    }

    fn count(&self) -> RecallResult<usize> {
        self.pool.with_reader(incident_crud::count_incidents)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn backend_name(&self) -> &str {
        "sqlite"
    }

    fn as_vector_index(&self) -> Option<&dyn IVectorIndex> {
        Some(self)
    }
}

impl IVectorIndex for StorageEngine {
    fn query_knn(
        &self,
        query: &[f32],
        filter: &TagFilter,
        k: usize,
    ) -> RecallResult<Vec<MatchResult>> {
        self.pool.with_reader(|conn| vector_search::query_knn(conn, query, filter, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(service: &str, embedding: Vec<f32>) -> IncidentDraft {
        IncidentDraft::new("boom", service, "prod", "cause", embedding)
    }

    #[test]
    fn insert_and_count_in_memory() {
        let engine = StorageEngine::open_in_memory(2).unwrap();
        engine.insert(draft("a", vec![1.0, 0.0])).unwrap();
        engine.insert(draft("b", vec![0.0, 1.0])).unwrap();
        assert_eq!(engine.count().unwrap(), 2);
        assert_eq!(engine.scan_all().unwrap().len(), 2);
    }

    #[test]
    fn knn_respects_filter_and_order() {
        let engine = StorageEngine::open_in_memory(2).unwrap();
        let near = engine.insert(draft("a", vec![1.0, 0.1])).unwrap();
        let far = engine.insert(draft("a", vec![0.1, 1.0])).unwrap();
        engine.insert(draft("b", vec![1.0, 0.0])).unwrap();

        let hits = engine
            .query_knn(&[1.0, 0.0], &TagFilter::new("a", "prod"), 10)
            .unwrap();
        let ids: Vec<_> = hits.iter().map(|m| m.incident.id.clone()).collect();
        assert_eq!(ids, vec![near.id, far.id]);
    }

    #[test]
    fn knn_with_zero_k_is_empty() {
        let engine = StorageEngine::open_in_memory(2).unwrap();
        engine.insert(draft("a", vec![1.0, 0.0])).unwrap();
        assert!(engine
            .query_knn(&[1.0, 0.0], &TagFilter::new("a", "prod"), 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn exposes_native_index() {
        let engine = StorageEngine::open_in_memory(2).unwrap();
        assert!(engine.as_vector_index().is_some());
        assert_eq!(engine.backend_name(), "sqlite");
    }
}
