/// Incident store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("incident store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("corrupt incident record {id}: {reason}")]
    CorruptRecord { id: String, reason: String },

    #[error("embedding dimension mismatch: store expects {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("incident id already exists: {id}")]
    DuplicateId { id: String },
}
