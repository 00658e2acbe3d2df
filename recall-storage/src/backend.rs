//! Backend selection from configuration.

use std::path::Path;
use std::sync::Arc;

use recall_core::config::StorageConfig;
use recall_core::errors::{RecallError, RecallResult};
use recall_core::traits::IIncidentStorage;

use crate::engine::StorageEngine;
use crate::memory::InMemoryIncidentStore;

/// Build the store named by `config.backend` for embeddings of `dimensions`.
pub fn open_store(
    config: &StorageConfig,
    dimensions: usize,
) -> RecallResult<Arc<dyn IIncidentStorage>> {
    match config.backend.as_str() {
        "memory" => Ok(Arc::new(InMemoryIncidentStore::new(dimensions))),
        "sqlite" => Ok(Arc::new(StorageEngine::open(
            Path::new(&config.db_path),
            dimensions,
            config,
        )?)),
        other => Err(RecallError::ConfigError(format!(
            "unknown storage backend: {other}"
        ))),
    }
}
