//! Remote fallback classifier client.
//!
//! The "expensive path": an external classification service consulted for
//! texts too long or too complex for the fast engine, and as the second
//! rung of the failure ladder. Bounded timeout; any failure maps to
//! `QuadrantError::FallbackUnavailable` and the router moves on to the
//! keyword heuristic.

use std::time::Duration;

use quadrant_core::errors::{QuadrantError, QuadrantResult};
use quadrant_core::models::{ClassificationResult, Confidence, EngineKind};
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::IClassifier;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    task: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    quadrant: u8,
    #[serde(default)]
    confidence: f64,
}

/// HTTP fallback classification service.
pub struct RemoteClassifier {
    client: reqwest::blocking::Client,
    url: String,
}

impl RemoteClassifier {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> QuadrantResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| QuadrantError::FallbackUnavailable {
                reason: format!("client build failed: {e}"),
            })?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl IClassifier for RemoteClassifier {
    fn classify(&self, text: &str) -> QuadrantResult<ClassificationResult> {
        let unavailable = |reason: String| QuadrantError::FallbackUnavailable { reason };

        let response = self
            .client
            .post(&self.url)
            .json(&ClassifyRequest { task: text })
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("service returned {}", response.status())));
        }

        let body: ClassifyResponse = response
            .json()
            .map_err(|e| unavailable(format!("malformed service response: {e}")))?;

        let quadrant = QuadrantId::try_from(body.quadrant)
            .map_err(|e| unavailable(format!("service returned bad label: {e}")))?;

        Ok(ClassificationResult {
            quadrant,
            confidence: Confidence::new(body.confidence),
            neighbors_used: 0,
            engine: EngineKind::Fallback,
        })
    }

    fn name(&self) -> &str {
        "remote-fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_service_reports_fallback_unavailable() {
        let classifier = RemoteClassifier::new("http://127.0.0.1:1/classify", 1).unwrap();
        let err = classifier.classify("anything").unwrap_err();
        assert!(matches!(err, QuadrantError::FallbackUnavailable { .. }));
        assert!(err.is_recoverable());
    }
}
