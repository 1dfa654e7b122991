//! Retrieval coordinator: remote backend first, local scan as fallback.

use std::sync::Mutex;

use quadrant_core::config::RetrievalConfig;
use quadrant_core::errors::QuadrantResult;
use quadrant_core::models::DegradationEvent;
use quadrant_core::traits::IEmbeddingProvider;
use quadrant_corpus::CorpusStore;
use tracing::warn;

use crate::backend::SearchBackend;
use crate::engine::{Neighbor, RetrievalEngine};

/// Top-level retrieval entry point.
///
/// When a backend is configured it answers first; on failure the local
/// brute-force engine takes over and a degradation event is recorded.
/// Backend results pass through the same threshold/top-k policy as local
/// ones, so callers see one behavior regardless of path.
pub struct Retriever {
    engine: RetrievalEngine,
    backend: Option<SearchBackend>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl Retriever {
    pub fn new(config: RetrievalConfig) -> Self {
        let backend = config.backend_url.as_ref().and_then(|url| {
            match SearchBackend::new(url, config.backend_timeout_secs) {
                Ok(backend) => Some(backend),
                Err(e) => {
                    warn!(error = %e, "vector-search backend not usable, local scan only");
                    None
                }
            }
        });

        Self {
            engine: RetrievalEngine::new(config),
            backend,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Retrieve neighbors for an already-embedded query.
    pub fn retrieve(
        &self,
        query_embedding: &[f32],
        corpus: &CorpusStore,
        provider: &dyn IEmbeddingProvider,
    ) -> QuadrantResult<Vec<Neighbor>> {
        if let Some(backend) = &self.backend {
            match backend.search(query_embedding, self.engine.config().top_k) {
                Ok(matches) => return Ok(self.apply_policy(matches)),
                Err(e) => {
                    warn!(error = %e, "vector-search backend failed, falling back to local scan");
                    if let Ok(mut events) = self.events.lock() {
                        events.push(DegradationEvent::now(
                            "retrieval",
                            e.to_string(),
                            "local-scan",
                        ));
                    }
                }
            }
        }

        self.engine.find_similar(query_embedding, corpus, provider)
    }

    /// Enforce the threshold and top-k bound on backend results.
    fn apply_policy(&self, mut neighbors: Vec<Neighbor>) -> Vec<Neighbor> {
        let config = self.engine.config();
        neighbors.retain(|n| n.similarity > config.min_similarity);
        neighbors.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        neighbors.truncate(config.top_k);
        neighbors
    }

    /// Drain degradation events accumulated by backend fallbacks.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}
