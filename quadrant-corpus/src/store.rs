//! In-memory training corpus store.

use std::sync::{Arc, PoisonError, RwLock};

use quadrant_core::models::{ExampleOrigin, TrainingExample};
use quadrant_core::quadrant::QuadrantId;
use tracing::{debug, info};

use crate::seed;

/// Owns every `TrainingExample` for its lifetime.
///
/// Reads return snapshots in insertion order; writes are serialized by
/// the `RwLock` writer, so concurrent `add_example` calls cannot lose
/// updates. Duplicate (text, quadrant) pairs are permitted — the store
/// appends naively on purpose, matching how feedback accumulates.
pub struct CorpusStore {
    examples: RwLock<Vec<Arc<TrainingExample>>>,
}

impl Default for CorpusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CorpusStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            examples: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the built-in seed corpus.
    pub fn with_seed() -> Self {
        let store = Self::new();
        for (text, quadrant) in seed::seed_examples() {
            store.add_example(text, quadrant, ExampleOrigin::Seed);
        }
        info!(examples = store.len(), "corpus seeded");
        store
    }

    /// Append a new example. The embedding is computed lazily on first
    /// retrieval use, never here, so writes do not block on the
    /// embedding provider.
    pub fn add_example(
        &self,
        text: impl Into<String>,
        quadrant: QuadrantId,
        origin: ExampleOrigin,
    ) -> Arc<TrainingExample> {
        let example = Arc::new(TrainingExample::new(text, quadrant, origin));
        let mut examples = self
            .examples
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        examples.push(Arc::clone(&example));
        debug!(quadrant = %quadrant, total = examples.len(), "training example added");
        example
    }

    /// Snapshot of all examples in insertion order.
    pub fn all_examples(&self) -> Vec<Arc<TrainingExample>> {
        self.examples
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the examples labeled with `quadrant`, in insertion
    /// order.
    pub fn examples_by_quadrant(&self, quadrant: QuadrantId) -> Vec<Arc<TrainingExample>> {
        self.examples
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.quadrant == quadrant)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.examples
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rebuild the corpus from the seed set, optionally carrying over
    /// accumulated feedback examples. Seed examples are replaced either
    /// way; cached embeddings on replaced examples are dropped with them.
    pub fn reset(&self, preserve_feedback: bool) {
        let mut examples = self
            .examples
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let feedback: Vec<Arc<TrainingExample>> = if preserve_feedback {
            examples
                .iter()
                .filter(|e| e.origin == ExampleOrigin::Feedback)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        let mut rebuilt: Vec<Arc<TrainingExample>> = seed::seed_examples()
            .into_iter()
            .map(|(text, quadrant)| {
                Arc::new(TrainingExample::new(text, quadrant, ExampleOrigin::Seed))
            })
            .collect();
        rebuilt.extend(feedback);

        info!(
            examples = rebuilt.len(),
            preserve_feedback, "corpus reset to seed set"
        );
        *examples = rebuilt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_filter_by_quadrant_includes_it_once_more() {
        let store = CorpusStore::new();
        let before = store.examples_by_quadrant(QuadrantId::Delegate).len();
        store.add_example("prepare report", QuadrantId::Delegate, ExampleOrigin::Feedback);
        let after = store.examples_by_quadrant(QuadrantId::Delegate).len();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn iteration_order_is_insertion_order() {
        let store = CorpusStore::new();
        store.add_example("first", QuadrantId::DoNow, ExampleOrigin::Seed);
        store.add_example("second", QuadrantId::Delete, ExampleOrigin::Seed);
        store.add_example("third", QuadrantId::DoNow, ExampleOrigin::Seed);

        let texts: Vec<String> = store.all_examples().iter().map(|e| e.text.clone()).collect();
        assert_eq!(texts, ["first", "second", "third"]);

        let do_now: Vec<String> = store
            .examples_by_quadrant(QuadrantId::DoNow)
            .iter()
            .map(|e| e.text.clone())
            .collect();
        assert_eq!(do_now, ["first", "third"]);
    }

    #[test]
    fn duplicates_are_permitted() {
        let store = CorpusStore::new();
        store.add_example("check emails", QuadrantId::Schedule, ExampleOrigin::Feedback);
        store.add_example("check emails", QuadrantId::Schedule, ExampleOrigin::Feedback);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn seeded_store_covers_all_quadrants() {
        let store = CorpusStore::with_seed();
        for quadrant in QuadrantId::ALL {
            assert!(
                !store.examples_by_quadrant(quadrant).is_empty(),
                "no seed examples for {quadrant}"
            );
        }
    }

    #[test]
    fn reset_discards_feedback_unless_preserved() {
        let store = CorpusStore::with_seed();
        let seed_len = store.len();
        store.add_example("ship hotfix", QuadrantId::DoNow, ExampleOrigin::Feedback);

        store.reset(true);
        assert_eq!(store.len(), seed_len + 1);

        store.reset(false);
        assert_eq!(store.len(), seed_len);
    }
}
