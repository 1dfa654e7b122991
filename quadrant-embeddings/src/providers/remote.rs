//! Remote embedding backend client.
//!
//! Optional collaborator reached over HTTP. Every call carries a bounded
//! timeout; any network error or non-200 response surfaces as
//! `EmbeddingError::BackendUnavailable` so the chain can fall back.

use std::time::Duration;

use quadrant_core::errors::{EmbeddingError, QuadrantResult};
use quadrant_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct EmbedRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Vec<f32>,
}

/// HTTP embedding backend.
pub struct RemoteEmbeddingProvider {
    client: reqwest::blocking::Client,
    url: String,
    dimensions: usize,
}

impl RemoteEmbeddingProvider {
    pub fn new(url: impl Into<String>, timeout_secs: u64, dimensions: usize) -> QuadrantResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EmbeddingError::BackendUnavailable {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            client,
            url: url.into(),
            dimensions,
        })
    }

    fn request(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        let response = self
            .client
            .post(&self.url)
            .json(&EmbedRequest { text })
            .send()
            .map_err(|e| EmbeddingError::BackendUnavailable {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(EmbeddingError::BackendUnavailable {
                reason: format!("backend returned {}", response.status()),
            }
            .into());
        }

        let body: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::BackendUnavailable {
                    reason: format!("malformed backend response: {e}"),
                })?;

        if body.embedding.len() != self.dimensions {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "backend returned {} dims, expected {}",
                    body.embedding.len(),
                    self.dimensions
                ),
            }
            .into());
        }

        Ok(body.embedding)
    }
}

impl IEmbeddingProvider for RemoteEmbeddingProvider {
    fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        self.request(text)
    }

    fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.request(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "remote-embedding"
    }

    fn is_available(&self) -> bool {
        true
    }
}
