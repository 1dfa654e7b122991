use proptest::prelude::*;
use quadrant_core::traits::IEmbeddingProvider;
use quadrant_embeddings::providers::HashedNgramProvider;
use quadrant_embeddings::similarity::cosine;

proptest! {
    #[test]
    fn cosine_never_nan(a in prop::collection::vec(-10.0f32..10.0, 0..64),
                        b in prop::collection::vec(-10.0f32..10.0, 0..64)) {
        let sim = cosine(&a, &b);
        prop_assert!(!sim.is_nan());
    }

    #[test]
    fn cosine_is_bounded(len in 1usize..32,
                         seed_a in -5.0f32..5.0,
                         seed_b in -5.0f32..5.0) {
        let a: Vec<f32> = (0..len).map(|i| seed_a + i as f32 * 0.1).collect();
        let b: Vec<f32> = (0..len).map(|i| seed_b - i as f32 * 0.2).collect();
        let sim = cosine(&a, &b);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim), "cosine out of bounds: {sim}");
    }

    #[test]
    fn zero_norm_always_scores_zero(len in 0usize..64,
                                    b in prop::collection::vec(-10.0f32..10.0, 0..64)) {
        let zero = vec![0.0f32; len];
        prop_assert_eq!(cosine(&zero, &b), 0.0);
        prop_assert_eq!(cosine(&b, &zero), 0.0);
    }

    #[test]
    fn hashed_provider_output_has_fixed_dims(text in ".{0,200}", dims in 8usize..512) {
        let provider = HashedNgramProvider::new(dims);
        let vec = provider.embed(&text).unwrap();
        prop_assert_eq!(vec.len(), dims);
    }

    #[test]
    fn hashed_provider_is_deterministic(text in ".{0,200}") {
        let provider = HashedNgramProvider::new(128);
        prop_assert_eq!(provider.embed(&text).unwrap(), provider.embed(&text).unwrap());
    }

    #[test]
    fn self_similarity_is_one_or_zero(text in ".{0,200}") {
        let provider = HashedNgramProvider::new(128);
        let vec = provider.embed(&text).unwrap();
        let sim = cosine(&vec, &vec);
        // Unit-norm vector scores ~1 against itself; the zero vector
        // (no tokens) scores 0 by the zero-norm guard.
        prop_assert!(sim == 0.0 || (sim - 1.0).abs() < 1e-6, "unexpected self-similarity {sim}");
    }
}
