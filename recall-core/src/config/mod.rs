pub mod defaults;
mod embedding_config;
mod observability_config;
mod retrieval_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{RecallError, RecallResult};

pub use embedding_config::EmbeddingConfig;
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
pub use storage_config::StorageConfig;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub observability: ObservabilityConfig,
}

impl RecallConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> RecallResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| RecallError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> RecallResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RecallError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Reject values no component can run with.
    pub fn validate(&self) -> RecallResult<()> {
        if self.embedding.dimensions == 0 {
            return Err(RecallError::ConfigError(
                "embedding.dimensions must be greater than 0".to_string(),
            ));
        }
        if self.retrieval.default_limit == 0 {
            return Err(RecallError::ConfigError(
                "retrieval.default_limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
