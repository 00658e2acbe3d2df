use super::{EmbeddingError, StorageError};

/// Crate-wide result alias.
pub type RecallResult<T> = Result<T, RecallError>;

/// Top-level error for every recall operation.
///
/// "No matches" is never an error: retrieval returns an empty list for that.
#[derive(Debug, thiserror::Error)]
pub enum RecallError {
    #[error("validation failed: {0}")]
    ValidationError(String),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("incident not found: {id}")]
    IncidentNotFound { id: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl RecallError {
    /// Whether the caller may retry the failed operation.
    ///
    /// Only transient store faults qualify. Embedding failures are surfaced
    /// as-is and never retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RecallError::StorageError(StorageError::Unavailable { .. })
                | RecallError::StorageError(StorageError::SqliteError { .. })
        )
    }

    /// Whether this failure came from an embedding call timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            RecallError::EmbeddingError(EmbeddingError::Timeout { .. })
        )
    }
}
