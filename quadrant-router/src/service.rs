//! ClassificationService — the facade the HTTP boundary talks to.
//!
//! Owns the corpus, the embedding engine, the classifiers, and the
//! router; exposes the classify operation plus the administrative
//! operations (add example, record feedback, retrain).

use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use quadrant_core::config::QuadrantConfig;
use quadrant_core::errors::{QuadrantResult, ValidationError};
use quadrant_core::models::{
    ClassificationQuery, ClassificationResult, DegradationEvent, EngineKind, ExampleOrigin,
    FeedbackRecord,
};
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::{IClassifier, IEmbeddingProvider};
use quadrant_classifier::NeighborClassifier;
use quadrant_corpus::{persist, CorpusStore};
use quadrant_embeddings::EmbeddingEngine;
use tracing::info;

use crate::heuristic::KeywordClassifier;
use crate::remote::RemoteClassifier;
use crate::router::ClassificationRouter;

/// Top-level classification service.
pub struct ClassificationService {
    corpus: Arc<CorpusStore>,
    embedder: Arc<EmbeddingEngine>,
    fast: Arc<NeighborClassifier>,
    router: ClassificationRouter,
    feedback_log: Mutex<Vec<FeedbackRecord>>,
    corpus_path: Option<PathBuf>,
}

impl ClassificationService {
    /// Build the full stack from configuration.
    ///
    /// A configured corpus file is loaded when present and created from
    /// the built-in seed set when missing; with no file configured the
    /// store is seeded in memory only.
    pub fn new(config: QuadrantConfig) -> QuadrantResult<Self> {
        let corpus = match &config.corpus.path {
            Some(path) if path.exists() => {
                let store = CorpusStore::new();
                let records = persist::load(path)?;
                persist::populate(&store, records);
                Arc::new(store)
            }
            Some(path) => {
                let store = CorpusStore::with_seed();
                persist::save(path, &store)?;
                Arc::new(store)
            }
            None => Arc::new(CorpusStore::with_seed()),
        };

        let embedder = Arc::new(EmbeddingEngine::new(&config.embedding));
        let provider: Arc<dyn IEmbeddingProvider> = embedder.clone();

        let fast = Arc::new(NeighborClassifier::new(
            Arc::clone(&corpus),
            provider,
            config.retrieval.clone(),
        ));

        let fallback: Option<Arc<dyn IClassifier>> = match &config.routing.fallback_url {
            Some(url) => match RemoteClassifier::new(url, config.routing.fallback_timeout_secs) {
                Ok(remote) => Some(Arc::new(remote)),
                Err(e) => {
                    tracing::warn!(error = %e, "fallback service not usable, heuristic only");
                    None
                }
            },
            None => None,
        };

        let router = ClassificationRouter::new(
            fast.clone(),
            fallback,
            Arc::new(KeywordClassifier::new()),
            config.routing.clone(),
        );

        info!(
            corpus = corpus.len(),
            provider = embedder.active_provider(),
            "classification service ready"
        );

        Ok(Self {
            corpus,
            embedder,
            fast,
            router,
            feedback_log: Mutex::new(Vec::new()),
            corpus_path: config.corpus.path,
        })
    }

    /// The single inbound operation: classify a task text.
    pub fn classify(
        &self,
        text: &str,
        force: Option<EngineKind>,
    ) -> QuadrantResult<ClassificationResult> {
        self.router.classify(&ClassificationQuery::new(text), force)
    }

    /// Add a labeled training example (administrative operation).
    pub fn add_example(&self, text: &str, quadrant: QuadrantId) -> QuadrantResult<()> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyTask.into());
        }
        self.corpus
            .add_example(text, quadrant, ExampleOrigin::Feedback);
        self.persist()
    }

    /// Record a user correction. The corrected label becomes a new
    /// training example; the prediction is only kept for the audit log.
    pub fn record_feedback(
        &self,
        task: &str,
        predicted: QuadrantId,
        corrected: QuadrantId,
    ) -> QuadrantResult<FeedbackRecord> {
        if task.trim().is_empty() {
            return Err(ValidationError::EmptyTask.into());
        }

        let record = FeedbackRecord::new(task, predicted, corrected);
        self.feedback_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());

        self.corpus
            .add_example(task, corrected, ExampleOrigin::Feedback);
        self.persist()?;

        info!(
            predicted = %predicted,
            corrected = %corrected,
            was_correct = record.was_correct(),
            "feedback recorded"
        );
        Ok(record)
    }

    /// Rebuild the corpus from the seed set, optionally keeping feedback
    /// examples. Clears the embedding cache (cached vectors may pair with
    /// dropped examples) and restores the fast path to healthy.
    pub fn retrain(&self, preserve_feedback: bool) -> QuadrantResult<usize> {
        self.corpus.reset(preserve_feedback);
        self.embedder.clear_cache();
        self.router.mark_fast_healthy();
        self.persist()?;
        info!(corpus = self.corpus.len(), preserve_feedback, "retrain complete");
        Ok(self.corpus.len())
    }

    /// Degradation events from every layer, oldest first per layer.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.embedder.drain_degradation_events();
        events.extend(self.fast.drain_degradation_events());
        events.extend(self.router.drain_degradation_events());
        events
    }

    /// Feedback records accumulated since startup.
    pub fn feedback_history(&self) -> Vec<FeedbackRecord> {
        self.feedback_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    pub fn is_fast_healthy(&self) -> bool {
        self.router.is_fast_healthy()
    }

    fn persist(&self) -> QuadrantResult<()> {
        if let Some(path) = &self.corpus_path {
            persist::save(path, &self.corpus)?;
        }
        Ok(())
    }
}
