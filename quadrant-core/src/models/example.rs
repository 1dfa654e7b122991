//! Labeled training examples with lazily computed embeddings.

use std::sync::Mutex;

use crate::errors::{EmbeddingError, QuadrantResult};
use crate::quadrant::QuadrantId;
use crate::traits::IEmbeddingProvider;

/// Where a training example came from.
///
/// Seed examples are replaced wholesale on retrain; feedback examples are
/// optionally preserved across retrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleOrigin {
    /// Part of the built-in or operator-loaded seed corpus.
    Seed,
    /// Added through user feedback or the add-example operation.
    Feedback,
}

/// A labeled training example. Text and label are immutable once created;
/// the embedding is derived data, computed on first retrieval use and
/// cached for the example's lifetime.
#[derive(Debug)]
pub struct TrainingExample {
    pub text: String,
    pub quadrant: QuadrantId,
    pub origin: ExampleOrigin,
    /// Memoized embedding. The per-example lock serializes computation so
    /// two concurrent retrievals never embed the same text twice.
    embedding: Mutex<Option<Vec<f32>>>,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, quadrant: QuadrantId, origin: ExampleOrigin) -> Self {
        Self {
            text: text.into(),
            quadrant,
            origin,
            embedding: Mutex::new(None),
        }
    }

    /// The cached embedding, if one has been computed.
    pub fn cached_embedding(&self) -> Option<Vec<f32>> {
        self.embedding
            .lock()
            .map(|slot| slot.clone())
            .unwrap_or(None)
    }

    /// The embedding for this example, computing and caching it through
    /// `provider` on first use. The lock is held across the computation,
    /// which keeps the compute-once invariant under concurrent callers.
    pub fn embedding_with(&self, provider: &dyn IEmbeddingProvider) -> QuadrantResult<Vec<f32>> {
        let mut slot = self
            .embedding
            .lock()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("embedding slot lock poisoned: {e}"),
            })?;

        if let Some(vec) = slot.as_ref() {
            return Ok(vec.clone());
        }

        let vec = provider.embed(&self.text)?;
        *slot = Some(vec.clone());
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::QuadrantResult;

    struct CountingProvider {
        calls: std::sync::atomic::AtomicUsize,
    }

    impl IEmbeddingProvider for CountingProvider {
        fn embed(&self, _text: &str) -> QuadrantResult<Vec<f32>> {
            self.calls
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(vec![0.5, 0.5])
        }
        fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            2
        }
        fn name(&self) -> &str {
            "counting-mock"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    #[test]
    fn embedding_is_computed_once() {
        let provider = CountingProvider {
            calls: std::sync::atomic::AtomicUsize::new(0),
        };
        let example =
            TrainingExample::new("urgent deadline", QuadrantId::DoNow, ExampleOrigin::Seed);

        assert!(example.cached_embedding().is_none());
        example.embedding_with(&provider).unwrap();
        example.embedding_with(&provider).unwrap();

        assert_eq!(provider.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(example.cached_embedding(), Some(vec![0.5, 0.5]));
    }
}
