//! EmbeddingEngine: the main entry point for recall-embeddings.
//!
//! Wraps one provider with the canonical field join, the L1 cache, and the
//! dimension check. Shared by the ingestion and diagnosis paths so both
//! produce vectors the same way.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use recall_core::config::EmbeddingConfig;
use recall_core::errors::RecallResult;
use recall_core::models::DegradationEvent;
use recall_core::traits::IEmbeddingProvider;
use tracing::{debug, info, warn};

use crate::cache::L1MemoryCache;
use crate::enrichment;
use crate::providers;

/// Oldest events are dropped once this many are pending.
pub const MAX_PENDING_DEGRADATION_EVENTS: usize = 256;

pub struct EmbeddingEngine {
    provider: Box<dyn IEmbeddingProvider>,
    cache: L1MemoryCache,
    dimensions: usize,
    events: Mutex<VecDeque<DegradationEvent>>,
}

impl EmbeddingEngine {
    /// Wrap an already-built provider.
    pub fn new(provider: Box<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        info!(
            provider = provider.name(),
            dims = config.dimensions,
            "EmbeddingEngine initialized"
        );
        Self {
            provider,
            cache: L1MemoryCache::new(config.cache_size),
            dimensions: config.dimensions,
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Build the configured provider and wrap it.
    pub fn from_config(config: &EmbeddingConfig) -> RecallResult<Self> {
        let provider = providers::create_provider(config)?;
        Ok(Self::new(provider, config))
    }

    /// Embed raw text. Cached by provider + text.
    ///
    /// A vector whose length differs from the configured dimension is
    /// returned as-is; the mismatch is logged and recorded as a degradation
    /// event.
    pub fn embed_text(&self, text: &str) -> RecallResult<Vec<f32>> {
        let key = L1MemoryCache::key_for(self.provider.name(), text);
        if let Some(vec) = self.cache.get(&key) {
            debug!(provider = self.provider.name(), "embedding cache hit");
            return Ok(vec);
        }

        let embedding = self.provider.embed(text)?;
        self.check_dimensions(&embedding);
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Embed a resolved incident for ingestion.
    pub fn embed_incident(
        &self,
        description: &str,
        service: &str,
        environment: &str,
        root_cause_summary: &str,
    ) -> RecallResult<Vec<f32>> {
        let text =
            enrichment::incident_text(description, service, environment, root_cause_summary);
        self.embed_text(&text)
    }

    /// Embed a diagnosis query.
    pub fn embed_query(
        &self,
        description: &str,
        service: &str,
        environment: &str,
    ) -> RecallResult<Vec<f32>> {
        let text = enrichment::query_text(description, service, environment);
        self.embed_text(&text)
    }

    fn check_dimensions(&self, embedding: &[f32]) {
        if embedding.len() == self.dimensions {
            return;
        }
        warn!(
            provider = self.provider.name(),
            expected = self.dimensions,
            actual = embedding.len(),
            "embedding dimension mismatch, continuing with returned vector"
        );
        if let Ok(mut events) = self.events.lock() {
            if events.len() >= MAX_PENDING_DEGRADATION_EVENTS {
                events.pop_front();
            }
            events.push_back(DegradationEvent {
                component: "embeddings".to_string(),
                detail: format!(
                    "{} returned {} dims, expected {}",
                    self.provider.name(),
                    embedding.len(),
                    self.dimensions
                ),
                timestamp: Utc::now(),
            });
        }
    }

    /// Drain pending degradation events, oldest first.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| events.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn pending_degradation_events(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Configured dimension D.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use recall_core::errors::{EmbeddingError, RecallError};

    use super::*;

    struct CountingProvider {
        calls: Arc<AtomicUsize>,
        dims: usize,
    }

    impl IEmbeddingProvider for CountingProvider {
        fn embed(&self, _text: &str) -> RecallResult<Vec<f32>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1.0; self.dims])
        }
        fn dimensions(&self) -> usize {
            self.dims
        }
        fn name(&self) -> &str {
            "counting-mock"
        }
    }

    struct FailingProvider;

    impl IEmbeddingProvider for FailingProvider {
        fn embed(&self, _text: &str) -> RecallResult<Vec<f32>> {
            Err(EmbeddingError::Unavailable {
                provider: "failing-mock".to_string(),
                reason: "mock failure".to_string(),
            }
            .into())
        }
        fn dimensions(&self) -> usize {
            8
        }
        fn name(&self) -> &str {
            "failing-mock"
        }
    }

    fn config(dims: usize) -> EmbeddingConfig {
        EmbeddingConfig {
            dimensions: dims,
            ..Default::default()
        }
    }

    #[test]
    fn stub_engine_produces_configured_dims() {
        let engine = EmbeddingEngine::from_config(&EmbeddingConfig {
            provider: "stub".to_string(),
            dimensions: 48,
            ..Default::default()
        })
        .unwrap();
        let v = engine.embed_query("boom", "payments", "prod").unwrap();
        assert_eq!(v.len(), 48);
        assert_eq!(engine.provider_name(), "char-bucket-stub");
    }

    #[test]
    fn repeated_text_hits_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = EmbeddingEngine::new(
            Box::new(CountingProvider {
                calls: Arc::clone(&calls),
                dims: 4,
            }),
            &config(4),
        );
        engine.embed_text("same").unwrap();
        engine.embed_text("same").unwrap();
        engine.embed_text("different").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dimension_mismatch_is_logged_not_fatal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = EmbeddingEngine::new(
            Box::new(CountingProvider { calls, dims: 3 }),
            &config(8),
        );
        let v = engine.embed_text("boom").unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(engine.pending_degradation_events(), 1);

        let events = engine.drain_degradation_events();
        assert_eq!(events[0].component, "embeddings");
        assert!(events[0].detail.contains("expected 8"));
        assert_eq!(engine.pending_degradation_events(), 0);
    }

    #[test]
    fn pending_events_are_bounded() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = EmbeddingEngine::new(
            Box::new(CountingProvider { calls, dims: 3 }),
            &config(8),
        );
        for i in 0..MAX_PENDING_DEGRADATION_EVENTS + 10 {
            engine.embed_text(&format!("distinct text {i}")).unwrap();
        }
        assert_eq!(
            engine.pending_degradation_events(),
            MAX_PENDING_DEGRADATION_EVENTS
        );
        assert_eq!(
            engine.drain_degradation_events().len(),
            MAX_PENDING_DEGRADATION_EVENTS
        );
        assert_eq!(engine.pending_degradation_events(), 0);
    }

    #[test]
    fn provider_failure_propagates() {
        let engine = EmbeddingEngine::new(Box::new(FailingProvider), &config(8));
        let err = engine.embed_text("boom").unwrap_err();
        assert!(matches!(
            err,
            RecallError::EmbeddingError(EmbeddingError::Unavailable { .. })
        ));
    }

    #[test]
    fn ingestion_and_query_share_layout() {
        let engine = EmbeddingEngine::from_config(&EmbeddingConfig {
            provider: "stub".to_string(),
            dimensions: 64,
            ..Default::default()
        })
        .unwrap();
        let direct = engine
            .embed_text("boom | payments | prod | cause")
            .unwrap();
        let via_incident = engine
            .embed_incident("boom", "payments", "prod", "cause")
            .unwrap();
        assert_eq!(direct, via_incident);
    }
}
