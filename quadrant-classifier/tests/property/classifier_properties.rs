use std::sync::Arc;

use proptest::prelude::*;
use quadrant_core::config::RetrievalConfig;
use quadrant_core::models::ExampleOrigin;
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::IClassifier;
use quadrant_classifier::NeighborClassifier;
use quadrant_corpus::CorpusStore;
use quadrant_embeddings::providers::HashedNgramProvider;

fn classifier_over(texts: &[(String, usize)]) -> NeighborClassifier {
    let corpus = CorpusStore::new();
    for (text, label) in texts {
        corpus.add_example(text.clone(), QuadrantId::ALL[label % 4], ExampleOrigin::Seed);
    }
    NeighborClassifier::new(
        Arc::new(corpus),
        Arc::new(HashedNgramProvider::new(128)),
        RetrievalConfig::default(),
    )
}

proptest! {
    /// Confidence stays in [0, 1] for any text over any corpus.
    #[test]
    fn confidence_is_always_in_unit_interval(
        corpus in prop::collection::vec(("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0usize..4), 0..16),
        text in ".{1,200}",
    ) {
        let classifier = classifier_over(&corpus);
        let result = classifier.classify(&text).unwrap();
        let confidence = result.confidence.value();
        prop_assert!((0.0..=1.0).contains(&confidence), "confidence out of range: {confidence}");
    }

    /// Same text, same corpus, same answer.
    #[test]
    fn classify_is_a_pure_function(
        corpus in prop::collection::vec(("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0usize..4), 0..16),
        text in ".{1,100}",
    ) {
        let classifier = classifier_over(&corpus);
        let first = classifier.classify(&text).unwrap();
        let second = classifier.classify(&text).unwrap();
        prop_assert_eq!(first.quadrant, second.quadrant);
        prop_assert_eq!(first.confidence.value(), second.confidence.value());
    }

    /// Never more neighbors than the configured top_k default of 5.
    #[test]
    fn neighbor_count_is_bounded(
        corpus in prop::collection::vec(("[a-z]{2,8}( [a-z]{2,8}){0,4}", 0usize..4), 0..32),
        text in "[a-z]{2,8}( [a-z]{2,8}){0,4}",
    ) {
        let classifier = classifier_over(&corpus);
        let result = classifier.classify(&text).unwrap();
        prop_assert!(result.neighbors_used <= 5);
    }
}
