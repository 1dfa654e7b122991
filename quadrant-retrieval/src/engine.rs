//! Brute-force nearest-neighbor scan over the corpus.

use quadrant_core::config::RetrievalConfig;
use quadrant_core::errors::QuadrantResult;
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::IEmbeddingProvider;
use quadrant_corpus::CorpusStore;
use quadrant_embeddings::similarity::cosine;
use tracing::{debug, warn};

/// A retrieved training example with its similarity to the query.
/// Carries the label text and quadrant so both locally and remotely
/// retrieved neighbors resolve to a vote the same way.
#[derive(Debug, Clone)]
pub struct Neighbor {
    pub text: String,
    pub quadrant: QuadrantId,
    pub similarity: f64,
}

/// Linear-scan retrieval engine.
///
/// O(n) over all corpus embeddings per query — a deliberate
/// simplicity-over-scale choice for corpus sizes in the hundreds. A
/// larger deployment would swap this for an approximate-nearest-neighbor
/// index behind the same interface.
pub struct RetrievalEngine {
    config: RetrievalConfig,
}

impl RetrievalEngine {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Find the corpus examples most similar to `query_embedding`.
    ///
    /// Returns at most `top_k` neighbors with similarity strictly above
    /// `min_similarity`, sorted descending. An empty corpus yields an
    /// empty result, never an error. Corpus entries whose lazy embedding
    /// cannot be computed are skipped — one bad entry must not fail the
    /// whole query.
    pub fn find_similar(
        &self,
        query_embedding: &[f32],
        corpus: &CorpusStore,
        provider: &dyn IEmbeddingProvider,
    ) -> QuadrantResult<Vec<Neighbor>> {
        let mut scored: Vec<Neighbor> = Vec::new();

        for example in corpus.all_examples() {
            let embedding = match example.embedding_with(provider) {
                Ok(vec) => vec,
                Err(e) => {
                    warn!(
                        text = %example.text,
                        error = %e,
                        "skipping corpus entry that failed to embed"
                    );
                    continue;
                }
            };

            let similarity = cosine(query_embedding, &embedding);
            if similarity > self.config.min_similarity {
                scored.push(Neighbor {
                    text: example.text.clone(),
                    quadrant: example.quadrant,
                    similarity,
                });
            }
        }

        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(self.config.top_k);

        debug!(
            neighbors = scored.len(),
            top_k = self.config.top_k,
            min_similarity = self.config.min_similarity,
            "local retrieval complete"
        );

        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_core::models::ExampleOrigin;
    use quadrant_embeddings::providers::HashedNgramProvider;

    fn engine_with(top_k: usize, min_similarity: f64) -> RetrievalEngine {
        RetrievalEngine::new(RetrievalConfig {
            top_k,
            min_similarity,
            ..Default::default()
        })
    }

    #[test]
    fn empty_corpus_returns_empty_not_error() {
        let engine = engine_with(5, 0.3);
        let provider = HashedNgramProvider::new(64);
        let corpus = CorpusStore::new();
        let query = provider.embed("anything").unwrap();
        assert!(engine.find_similar(&query, &corpus, &provider).unwrap().is_empty());
    }

    #[test]
    fn close_example_is_retrieved_above_threshold() {
        let engine = engine_with(5, 0.3);
        let provider = HashedNgramProvider::new(384);
        let corpus = CorpusStore::new();
        corpus.add_example("fix critical bug now", QuadrantId::DoNow, ExampleOrigin::Seed);

        let query = provider.embed("critical bug needs fixing now").unwrap();
        let neighbors = engine.find_similar(&query, &corpus, &provider).unwrap();

        assert_eq!(neighbors.len(), 1);
        assert_eq!(neighbors[0].quadrant, QuadrantId::DoNow);
        assert!(neighbors[0].similarity > 0.3);
    }

    #[test]
    fn unrelated_examples_fall_below_threshold() {
        let engine = engine_with(5, 0.3);
        let provider = HashedNgramProvider::new(384);
        let corpus = CorpusStore::new();
        corpus.add_example("water the plants", QuadrantId::Delete, ExampleOrigin::Seed);

        let query = provider.embed("quarterly budget forecast").unwrap();
        assert!(engine.find_similar(&query, &corpus, &provider).unwrap().is_empty());
    }

    #[test]
    fn results_are_sorted_descending_and_truncated() {
        let engine = engine_with(2, 0.0);
        let provider = HashedNgramProvider::new(384);
        let corpus = CorpusStore::new();
        corpus.add_example("prepare annual report", QuadrantId::Delegate, ExampleOrigin::Seed);
        corpus.add_example("prepare report", QuadrantId::Delegate, ExampleOrigin::Seed);
        corpus.add_example("prepare the report today", QuadrantId::Delegate, ExampleOrigin::Seed);

        let query = provider.embed("prepare report").unwrap();
        let neighbors = engine.find_similar(&query, &corpus, &provider).unwrap();

        assert_eq!(neighbors.len(), 2);
        assert!(neighbors[0].similarity >= neighbors[1].similarity);
        assert_eq!(neighbors[0].text, "prepare report");
    }

    /// Provider with hand-picked vectors so similarities are exact.
    struct AxisProvider;
    impl IEmbeddingProvider for AxisProvider {
        fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>> {
            Ok(match text {
                "x" => vec![1.0, 0.0],
                "y" => vec![0.0, 1.0],
                _ => vec![1.0, 1.0],
            })
        }
        fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "axis-mock"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn exact_threshold_is_excluded() {
        // similarity == min_similarity must be dropped (strict bound).
        let engine = engine_with(5, 1.0);
        let corpus = CorpusStore::new();
        corpus.add_example("x", QuadrantId::DoNow, ExampleOrigin::Seed);

        // Identical axis vectors: cosine is exactly 1.0.
        let query = AxisProvider.embed("x").unwrap();
        let neighbors = engine.find_similar(&query, &corpus, &AxisProvider).unwrap();
        assert!(
            neighbors.is_empty(),
            "similarity equal to min_similarity must not pass the strict bound"
        );
    }
}
