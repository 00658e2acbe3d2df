use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "stub" or "voyage".
    pub provider: String,
    /// Remote model name.
    pub model: String,
    /// Remote embeddings endpoint.
    pub endpoint: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Store-wide embedding dimension D.
    pub dimensions: usize,
    /// Timeout for one remote embedding call.
    pub request_timeout_ms: u64,
    /// L1 cache max entries.
    pub cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            endpoint: defaults::DEFAULT_EMBEDDING_ENDPOINT.to_string(),
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            request_timeout_ms: defaults::DEFAULT_REQUEST_TIMEOUT_MS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
        }
    }
}
