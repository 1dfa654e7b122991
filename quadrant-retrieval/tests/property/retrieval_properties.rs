use proptest::prelude::*;
use quadrant_core::config::RetrievalConfig;
use quadrant_core::models::ExampleOrigin;
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::IEmbeddingProvider;
use quadrant_corpus::CorpusStore;
use quadrant_embeddings::providers::HashedNgramProvider;
use quadrant_retrieval::RetrievalEngine;

fn corpus_from(texts: &[String]) -> CorpusStore {
    let corpus = CorpusStore::new();
    for (i, text) in texts.iter().enumerate() {
        corpus.add_example(text.clone(), QuadrantId::ALL[i % 4], ExampleOrigin::Seed);
    }
    corpus
}

proptest! {
    /// Raising the similarity threshold never yields more neighbors.
    #[test]
    fn threshold_is_monotone(
        texts in prop::collection::vec("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0..20),
        query in "[a-z]{2,8}( [a-z]{2,8}){0,4}",
        low in 0.0f64..0.5,
        bump in 0.0f64..0.5,
    ) {
        let provider = HashedNgramProvider::new(128);
        let corpus = corpus_from(&texts);
        let embedding = provider.embed(&query).unwrap();

        let loose = RetrievalEngine::new(RetrievalConfig {
            top_k: usize::MAX,
            min_similarity: low,
            ..Default::default()
        });
        let strict = RetrievalEngine::new(RetrievalConfig {
            top_k: usize::MAX,
            min_similarity: low + bump,
            ..Default::default()
        });

        let loose_count = loose.find_similar(&embedding, &corpus, &provider).unwrap().len();
        let strict_count = strict.find_similar(&embedding, &corpus, &provider).unwrap().len();
        prop_assert!(strict_count <= loose_count,
            "raising min_similarity from {low} grew results: {loose_count} -> {strict_count}");
    }

    /// Never more than top_k results, always sorted descending.
    #[test]
    fn results_bounded_and_ordered(
        texts in prop::collection::vec("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0..20),
        query in "[a-z]{2,8}( [a-z]{2,8}){0,4}",
        top_k in 1usize..8,
    ) {
        let provider = HashedNgramProvider::new(128);
        let corpus = corpus_from(&texts);
        let embedding = provider.embed(&query).unwrap();

        let engine = RetrievalEngine::new(RetrievalConfig {
            top_k,
            min_similarity: 0.0,
            ..Default::default()
        });
        let neighbors = engine.find_similar(&embedding, &corpus, &provider).unwrap();

        prop_assert!(neighbors.len() <= top_k);
        for pair in neighbors.windows(2) {
            prop_assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    /// Every returned neighbor clears the strict threshold.
    #[test]
    fn all_results_exceed_threshold(
        texts in prop::collection::vec("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0..20),
        query in "[a-z]{2,8}( [a-z]{2,8}){0,4}",
        min in 0.0f64..1.0,
    ) {
        let provider = HashedNgramProvider::new(128);
        let corpus = corpus_from(&texts);
        let embedding = provider.embed(&query).unwrap();

        let engine = RetrievalEngine::new(RetrievalConfig {
            top_k: usize::MAX,
            min_similarity: min,
            ..Default::default()
        });
        for neighbor in engine.find_similar(&embedding, &corpus, &provider).unwrap() {
            prop_assert!(neighbor.similarity > min);
        }
    }
}
