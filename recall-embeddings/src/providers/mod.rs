//! Provider registry.
//!
//! The configured provider is the only one used. A remote provider that
//! cannot be built is an error, never a silent switch to the stub: vectors
//! from a different embedding space would produce confidently wrong scores.

pub mod api_provider;
pub mod char_bucket;

pub use api_provider::ApiProvider;
pub use char_bucket::CharBucketProvider;

use std::time::Duration;

use recall_core::config::EmbeddingConfig;
use recall_core::errors::{EmbeddingError, RecallError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use tracing::info;

/// Build the provider named in the config.
pub fn create_provider(config: &EmbeddingConfig) -> RecallResult<Box<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "stub" => {
            info!(provider = "stub", dims = config.dimensions, "using char-bucket stub embeddings");
            Ok(Box::new(CharBucketProvider::new(config.dimensions)))
        }
        "voyage" | "api" => {
            let api_key = std::env::var(&config.api_key_env).map_err(|_| {
                EmbeddingError::NotConfigured {
                    reason: format!("missing {} in environment", config.api_key_env),
                }
            })?;
            let provider = ApiProvider::new(
                config.model.clone(),
                api_key,
                config.endpoint.clone(),
                config.dimensions,
                Duration::from_millis(config.request_timeout_ms),
            )?;
            info!(
                provider = "voyage",
                model = %config.model,
                dims = config.dimensions,
                timeout_ms = config.request_timeout_ms,
                "remote embedding provider configured"
            );
            Ok(Box::new(provider))
        }
        other => Err(RecallError::ConfigError(format!(
            "unknown embedding provider: {other}"
        ))),
    }
}
