/// Embedding gateway errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding provider {provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },

    #[error("embedding provider {provider} timed out after {after_ms}ms")]
    Timeout { provider: String, after_ms: u64 },

    #[error("embedding provider {provider} returned no vector")]
    MissingVector { provider: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider not configured: {reason}")]
    NotConfigured { reason: String },
}
