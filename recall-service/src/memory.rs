//! IncidentMemory: validation, embedding, storage and retrieval wired together.

use std::sync::Arc;

use recall_core::config::{RecallConfig, RetrievalConfig};
use recall_core::errors::{RecallError, RecallResult};
use recall_core::models::{
    DegradationEvent, DiagnoseRequest, Diagnosis, HealthReport, HealthStatus, IncidentDraft,
    IncidentListing, IncidentRecord, RecordIncidentRequest, TagFilter,
};
use recall_core::traits::IIncidentStorage;
use recall_embeddings::EmbeddingEngine;
use recall_retrieval::{assemble, RetrievalEngine};
use tracing::{debug, info};

use crate::validation;

pub struct IncidentMemory {
    storage: Arc<dyn IIncidentStorage>,
    embeddings: EmbeddingEngine,
    retrieval: RetrievalConfig,
}

impl IncidentMemory {
    pub fn new(
        storage: Arc<dyn IIncidentStorage>,
        embeddings: EmbeddingEngine,
        retrieval: RetrievalConfig,
    ) -> Self {
        Self {
            storage,
            embeddings,
            retrieval,
        }
    }

    /// Build store and embedding provider from configuration.
    pub fn from_config(config: &RecallConfig) -> RecallResult<Self> {
        config.validate()?;
        let embeddings = EmbeddingEngine::from_config(&config.embedding)?;
        let storage = recall_storage::open_store(&config.storage, config.embedding.dimensions)?;
        info!(
            backend = storage.backend_name(),
            provider = embeddings.provider_name(),
            dims = config.embedding.dimensions,
            "incident memory ready"
        );
        Ok(Self::new(storage, embeddings, config.retrieval.clone()))
    }

    /// Rank prior incidents for a new error and suggest a fix.
    ///
    /// Embedding and store failures propagate; an empty store or an unknown
    /// service yields the cold-start diagnosis, not an error.
    pub fn diagnose(&self, req: &DiagnoseRequest) -> RecallResult<Diagnosis> {
        validation::validate_diagnose(req)?;

        let query = self
            .embeddings
            .embed_query(&req.description, &req.service, &req.environment)?;
        let filter = TagFilter::new(req.service.clone(), req.environment.clone());
        let matches = RetrievalEngine::new(self.storage.as_ref(), self.retrieval.clone())
            .find_similar(&query, &filter)?;
        let diagnosis = assemble(matches);

        info!(
            service = %req.service,
            environment = %req.environment,
            matches = diagnosis.matches.len(),
            confidence = %diagnosis.suggested_fix.confidence,
            "diagnosis complete"
        );
        Ok(diagnosis)
    }

    /// Embed and append a resolved incident. Every call appends, even for
    /// near-duplicates of an existing record.
    pub fn record_incident(&self, req: RecordIncidentRequest) -> RecallResult<IncidentRecord> {
        validation::validate_record(&req)?;

        let embedding = self.embeddings.embed_incident(
            &req.description,
            &req.service,
            &req.environment,
            &req.root_cause_summary,
        )?;
        let patch_diff = req.patch_diff.filter(|p| !p.is_empty());
        let draft = IncidentDraft::new(
            req.description,
            req.service,
            req.environment,
            req.root_cause_summary,
            embedding,
        )
        .with_patch_diff(patch_diff);

        let record = self.storage.insert(draft)?;
        debug!(id = %record.id, service = %record.service, "incident recorded");
        Ok(record)
    }

    /// Every stored incident without its vector, newest first.
    pub fn list_incidents(&self) -> RecallResult<Vec<IncidentListing>> {
        let mut listings: Vec<IncidentListing> = self
            .storage
            .scan_all()?
            .iter()
            .map(IncidentListing::from)
            .collect();
        listings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(listings)
    }

    pub fn get_incident(&self, id: &str) -> RecallResult<IncidentRecord> {
        self.storage
            .get_by_id(id)?
            .ok_or_else(|| RecallError::IncidentNotFound { id: id.to_string() })
    }

    /// `Degraded` while degradation events are pending. Callers that report
    /// health consume them with [`Self::drain_degradation_events`].
    pub fn health(&self) -> RecallResult<HealthReport> {
        let pending = self.embeddings.pending_degradation_events();
        Ok(HealthReport {
            status: if pending == 0 {
                HealthStatus::Healthy
            } else {
                HealthStatus::Degraded
            },
            store_backend: self.storage.backend_name().to_string(),
            incident_count: self.storage.count()?,
            embedding_provider: self.embeddings.provider_name().to_string(),
            dimensions: self.embeddings.dimensions(),
            pending_degradation_events: pending,
        })
    }

    /// Take the pending degradation events; `health()` reads `Healthy`
    /// again until the next one.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.embeddings.drain_degradation_events()
    }

    pub fn embeddings(&self) -> &EmbeddingEngine {
        &self.embeddings
    }

    pub fn storage(&self) -> &Arc<dyn IIncidentStorage> {
        &self.storage
    }
}
