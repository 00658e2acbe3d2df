//! In-process incident store.
//!
//! Inserts take the write lock, so concurrent appends never lose records.
//! Readers clone a snapshot and may or may not see an insert that completes
//! at the same time.

use std::collections::HashMap;
use std::sync::RwLock;

use recall_core::errors::{RecallResult, StorageError};
use recall_core::models::{IncidentDraft, IncidentRecord};
use recall_core::traits::IIncidentStorage;
use tracing::debug;

use crate::validate_draft;

#[derive(Default)]
struct Inner {
    records: Vec<IncidentRecord>,
    by_id: HashMap<String, usize>,
}

pub struct InMemoryIncidentStore {
    inner: RwLock<Inner>,
    dimensions: usize,
}

impl InMemoryIncidentStore {
    pub fn new(dimensions: usize) -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
            dimensions,
        }
    }
}

fn poisoned(what: &str) -> StorageError {
    StorageError::Unavailable {
        reason: format!("in-memory store {what} lock poisoned"),
    }
}

impl IIncidentStorage for InMemoryIncidentStore {
    fn insert(&self, draft: IncidentDraft) -> RecallResult<IncidentRecord> {
        validate_draft(&draft, self.dimensions)?;
        let record = draft.into_record();

        let mut inner = self.inner.write().map_err(|_| poisoned("write"))?;
        if inner.by_id.contains_key(&record.id) {
            return Err(StorageError::DuplicateId { id: record.id }.into());
        }
        let position = inner.records.len();
        inner.by_id.insert(record.id.clone(), position);
        inner.records.push(record.clone());

        debug!(id = %record.id, service = %record.service, "incident appended in memory");
        Ok(record)
    }

    fn scan_all(&self) -> RecallResult<Vec<IncidentRecord>> {
        let inner = self.inner.read().map_err(|_| poisoned("read"))?;
        Ok(inner.records.clone())
    }

    fn get_by_id(&self, id: &str) -> RecallResult<Option<IncidentRecord>> {
        let inner = self.inner.read().map_err(|_| poisoned("read"))?;
        Ok(inner
            .by_id
            .get(id)
            .and_then(|&idx| inner.records.get(idx))
            .cloned())
    }

    fn count(&self) -> RecallResult<usize> {
        let inner = self.inner.read().map_err(|_| poisoned("read"))?;
        Ok(inner.records.len())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
