//! NeighborClassifier — the fast in-process classification path.

use std::sync::Arc;

use quadrant_core::config::RetrievalConfig;
use quadrant_core::errors::QuadrantResult;
use quadrant_core::models::{ClassificationResult, DegradationEvent, EngineKind};
use quadrant_core::traits::{IClassifier, IEmbeddingProvider};
use quadrant_corpus::CorpusStore;
use quadrant_retrieval::Retriever;
use tracing::debug;

use crate::vote::VoteTally;

/// Retrieval-augmented classifier: embed the task, fetch the nearest
/// labeled examples, and let them vote.
///
/// Holds read references only — the corpus is never mutated during a
/// call, so concurrent classifications need no coordination.
pub struct NeighborClassifier {
    corpus: Arc<CorpusStore>,
    embedder: Arc<dyn IEmbeddingProvider>,
    retriever: Retriever,
}

impl NeighborClassifier {
    pub fn new(
        corpus: Arc<CorpusStore>,
        embedder: Arc<dyn IEmbeddingProvider>,
        retrieval_config: RetrievalConfig,
    ) -> Self {
        Self {
            corpus,
            embedder,
            retriever: Retriever::new(retrieval_config),
        }
    }

    /// Drain degradation events recorded by the retrieval fallback.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.retriever.drain_degradation_events()
    }
}

impl IClassifier for NeighborClassifier {
    fn classify(&self, text: &str) -> QuadrantResult<ClassificationResult> {
        // Embedding failure propagates; the routing layer owns fallback.
        let query_embedding = self.embedder.embed(text)?;

        let neighbors = self
            .retriever
            .retrieve(&query_embedding, &self.corpus, self.embedder.as_ref())?;

        let mut tally = VoteTally::new();
        for neighbor in &neighbors {
            tally.add_neighbor(neighbor.quadrant, neighbor.similarity);
        }
        let (quadrant, confidence) = tally.winner();

        debug!(
            %quadrant,
            %confidence,
            neighbors = neighbors.len(),
            "neighbor vote complete"
        );

        Ok(ClassificationResult {
            quadrant,
            confidence,
            neighbors_used: neighbors.len(),
            engine: EngineKind::Fast,
        })
    }

    fn name(&self) -> &str {
        "neighbor-vote"
    }
}
