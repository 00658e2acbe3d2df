//! Remote embedding provider.
//!
//! Voyage-compatible HTTP API: `POST {endpoint}` with bearer auth and
//! `{ model, input }`, vector read from `data[0].embedding`. Every call is
//! bounded by a timeout and never retried; failures surface to the caller.

use std::time::Duration;

use recall_core::errors::{EmbeddingError, RecallResult};
use recall_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;
use tracing::debug;

/// Cloud API embedding provider.
///
/// Blocking from the caller's point of view: requests run on a small
/// runtime owned by the provider. Do not call from inside another runtime.
pub struct ApiProvider {
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    timeout: Duration,
    client: reqwest::Client,
    runtime: Runtime,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    embedding: Option<Vec<f32>>,
}

impl ApiProvider {
    pub fn new(
        model: String,
        api_key: String,
        endpoint: String,
        dimensions: usize,
        timeout: Duration,
    ) -> RecallResult<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("recall-embed")
            .enable_all()
            .build()
            .map_err(|e| EmbeddingError::Unavailable {
                provider: model.clone(),
                reason: format!("runtime error: {e}"),
            })?;

        Ok(Self {
            model,
            api_key,
            endpoint,
            dimensions,
            timeout,
            client: reqwest::Client::new(),
            runtime,
        })
    }

    /// Replace the HTTP client, e.g. to set proxy or TLS options.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn unavailable(&self, reason: String) -> EmbeddingError {
        EmbeddingError::Unavailable {
            provider: self.model.clone(),
            reason,
        }
    }

    async fn send_request(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: vec![text],
            })
            .send()
            .await
            .map_err(|e| self.unavailable(format!("HTTP error: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.unavailable(format!("API returned {status}: {body}")));
        }

        let parsed: EmbedResponse = response
            .json()
            .await
            .map_err(|e| self.unavailable(format!("malformed response: {e}")))?;

        parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.embedding)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| EmbeddingError::MissingVector {
                provider: self.model.clone(),
            })
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        debug!(model = %self.model, chars = text.len(), "requesting remote embedding");
        let outcome = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, self.send_request(text)).await });

        match outcome {
            Ok(result) => Ok(result?),
            Err(_) => Err(EmbeddingError::Timeout {
                provider: self.model.clone(),
                after_ms: self.timeout.as_millis() as u64,
            }
            .into()),
        }
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }
}
