use crate::errors::RecallResult;

/// Text-to-vector capability.
///
/// Injected wherever embeddings are needed; there is no process-wide provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>>;

    /// Dimensionality this provider is expected to produce.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
