//! # recall-storage
//!
//! Append-only incident store behind `IIncidentStorage`, with two backends
//! selected by configuration:
//!
//! - `InMemoryIncidentStore`: a `RwLock`-guarded collection for tests and
//!   small deployments. Retrieval ranks it by full scan.
//! - `StorageEngine`: SQLite, one row per incident, embeddings as packed
//!   little-endian `f32` blobs. Also implements `IVectorIndex` with the tag
//!   filter bound into the query.

pub mod backend;
pub mod codec;
pub mod engine;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use backend::open_store;
pub use engine::StorageEngine;
pub use memory::InMemoryIncidentStore;

use recall_core::errors::{RecallError, RecallResult, StorageError};
use recall_core::models::IncidentDraft;

/// Wrap a SQLite failure message as a storage error.
pub fn to_storage_err(message: impl Into<String>) -> RecallError {
    StorageError::SqliteError {
        message: message.into(),
    }
    .into()
}

/// Checks shared by every backend before a draft is persisted.
pub(crate) fn validate_draft(draft: &IncidentDraft, dimensions: usize) -> RecallResult<()> {
    if draft.service.is_empty() || draft.environment.is_empty() {
        return Err(RecallError::ValidationError(
            "service and environment tags must be non-empty".to_string(),
        ));
    }
    if draft.embedding.len() != dimensions {
        return Err(StorageError::DimensionMismatch {
            expected: dimensions,
            actual: draft.embedding.len(),
        }
        .into());
    }
    Ok(())
}
