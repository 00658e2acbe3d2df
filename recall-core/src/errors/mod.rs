mod embedding_error;
mod recall_error;
mod storage_error;

pub use embedding_error::EmbeddingError;
pub use recall_error::{RecallError, RecallResult};
pub use storage_error::StorageError;
