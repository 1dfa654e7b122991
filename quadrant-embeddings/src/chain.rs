//! Ordered provider fallback chain.
//!
//! Tries providers in priority order; the first success wins. Every
//! fallback past the primary is recorded as a degradation event. Event
//! accumulation sits behind a mutex so `embed` stays `&self` and the whole
//! chain is safe to share across concurrent requests.

use std::sync::Mutex;

use quadrant_core::errors::{EmbeddingError, QuadrantResult};
use quadrant_core::models::DegradationEvent;
use quadrant_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Fallback chain over embedding providers.
pub struct ProviderChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Append a provider at the end of the chain (lowest priority so far).
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed through the chain, degrading provider by provider.
    pub fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        let mut last_error = None;

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match provider.embed(text) {
                Ok(vec) => {
                    if i > 0 {
                        self.record_fallback(i, &last_error);
                    }
                    return Ok(vec);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::Unavailable {
                detail: format!("all {} providers exhausted", self.providers.len()),
            }
            .into()
        }))
    }

    /// Embed a batch through the chain. A provider must handle the whole
    /// batch to win; partial successes are not stitched together.
    pub fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
        let mut last_error = None;

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match provider.embed_batch(texts) {
                Ok(vecs) => {
                    if i > 0 {
                        self.record_fallback(i, &last_error);
                    }
                    return Ok(vecs);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "batch embed failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::Unavailable {
                detail: format!("all {} providers exhausted", self.providers.len()),
            }
            .into()
        }))
    }

    fn record_fallback(
        &self,
        winner_index: usize,
        last_error: &Option<quadrant_core::QuadrantError>,
    ) {
        let primary = self
            .providers
            .first()
            .map(|p| p.name())
            .unwrap_or("unknown");
        let failure = match last_error {
            Some(e) => format!("{primary} failed: {e}"),
            None => format!("{primary} unavailable"),
        };
        let event = DegradationEvent::now(
            "embeddings",
            failure,
            self.providers[winner_index].name(),
        );
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
