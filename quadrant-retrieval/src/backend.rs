//! Remote vector-search backend client.
//!
//! Optional collaborator: a similarity-search service queried with the
//! embedded query vector. Any transport failure or non-200 response maps
//! to `RetrievalError::BackendUnavailable`, which the retriever recovers
//! from by switching to the local brute-force scan.

use std::time::Duration;

use quadrant_core::errors::{QuadrantResult, RetrievalError};
use quadrant_core::quadrant::QuadrantId;
use serde::{Deserialize, Serialize};

use crate::engine::Neighbor;

#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    embedding: &'a [f32],
    top_k: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    matches: Vec<SearchMatch>,
}

#[derive(Debug, Deserialize)]
struct SearchMatch {
    text: String,
    quadrant: u8,
    similarity: f64,
}

/// HTTP similarity-search backend.
pub struct SearchBackend {
    client: reqwest::blocking::Client,
    url: String,
}

impl SearchBackend {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> QuadrantResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| RetrievalError::BackendUnavailable {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Query the backend for the nearest labeled examples.
    ///
    /// Matches carrying an out-of-range quadrant id are dropped with the
    /// count logged by the caller — a misbehaving backend must not poison
    /// the vote.
    pub fn search(&self, embedding: &[f32], top_k: usize) -> QuadrantResult<Vec<Neighbor>> {
        let response = self
            .client
            .post(&self.url)
            .json(&SearchRequest { embedding, top_k })
            .send()
            .map_err(|e| RetrievalError::BackendUnavailable {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RetrievalError::BackendUnavailable {
                reason: format!("backend returned {}", response.status()),
            }
            .into());
        }

        let body: SearchResponse =
            response
                .json()
                .map_err(|e| RetrievalError::BackendUnavailable {
                    reason: format!("malformed backend response: {e}"),
                })?;

        let neighbors = body
            .matches
            .into_iter()
            .filter_map(|m| {
                QuadrantId::try_from(m.quadrant).ok().map(|quadrant| Neighbor {
                    text: m.text,
                    quadrant,
                    similarity: m.similarity,
                })
            })
            .collect();

        Ok(neighbors)
    }
}
