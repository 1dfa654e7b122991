//! Per-request routing between the fast path and the fallback ladder.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use quadrant_core::config::RoutingConfig;
use quadrant_core::errors::QuadrantResult;
use quadrant_core::models::{
    ClassificationQuery, ClassificationResult, DegradationEvent, EngineKind,
};
use quadrant_core::traits::IClassifier;
use tracing::{debug, warn};

/// Progress of one request through the router. Traced, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RouteState {
    Received,
    RouteDecision,
    Classifying,
    Completed,
    Degraded,
    Failed,
}

/// Routes each request to the fast in-process classifier or down the
/// fallback ladder (remote service → keyword heuristic → neutral answer).
///
/// Health state is owned by the instance and injected nowhere else, so
/// independent routers (one per test, one per deployment) never share a
/// flag. The flag is a single idempotent boolean write: a cancelled
/// request can leave nothing half-updated.
pub struct ClassificationRouter {
    fast: Arc<dyn IClassifier>,
    fallback: Option<Arc<dyn IClassifier>>,
    heuristic: Arc<dyn IClassifier>,
    fast_healthy: AtomicBool,
    config: RoutingConfig,
    events: Mutex<Vec<DegradationEvent>>,
}

impl ClassificationRouter {
    pub fn new(
        fast: Arc<dyn IClassifier>,
        fallback: Option<Arc<dyn IClassifier>>,
        heuristic: Arc<dyn IClassifier>,
        config: RoutingConfig,
    ) -> Self {
        Self {
            fast,
            fallback,
            heuristic,
            fast_healthy: AtomicBool::new(true),
            config,
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn is_fast_healthy(&self) -> bool {
        self.fast_healthy.load(Ordering::Relaxed)
    }

    /// Restore the fast path, e.g. after a retrain rebuilt its corpus.
    pub fn mark_fast_healthy(&self) {
        self.fast_healthy.store(true, Ordering::Relaxed);
    }

    /// Classify a task, always producing an answer for valid input.
    ///
    /// `force` bypasses the route decision: `Fast` attempts the fast path
    /// even while it is marked unhealthy (and heals the flag on success —
    /// the recovery probe), `Fallback` skips straight down the ladder.
    pub fn classify(
        &self,
        query: &ClassificationQuery,
        force: Option<EngineKind>,
    ) -> QuadrantResult<ClassificationResult> {
        debug!(state = ?RouteState::Received, "classification request");
        query.validate()?;

        let text = query.text.as_str();
        let use_fast = match force {
            Some(EngineKind::Fast) => true,
            Some(EngineKind::Fallback) => false,
            None => self.is_fast_healthy() && self.is_simple(text),
        };
        debug!(state = ?RouteState::RouteDecision, use_fast, forced = force.is_some(), "route chosen");

        if use_fast {
            debug!(state = ?RouteState::Classifying, engine = self.fast.name(), "fast path");
            match self.fast.classify(text) {
                Ok(result) => {
                    self.fast_healthy.store(true, Ordering::Relaxed);
                    debug!(state = ?RouteState::Completed, quadrant = %result.quadrant, "fast path answered");
                    return Ok(result);
                }
                Err(e) if e.is_recoverable() => {
                    self.fast_healthy.store(false, Ordering::Relaxed);
                    warn!(state = ?RouteState::Degraded, error = %e, "fast path failed, degrading");
                    self.record_event(e.to_string(), "fallback-ladder");
                }
                Err(e) => {
                    debug!(state = ?RouteState::Failed, error = %e, "non-recoverable failure");
                    return Err(e);
                }
            }
        }

        self.classify_fallback(text)
    }

    /// Walk the fallback ladder: remote service, keyword heuristic,
    /// neutral answer. Nothing below the validation layer errors out —
    /// the "always answer" policy.
    fn classify_fallback(&self, text: &str) -> QuadrantResult<ClassificationResult> {
        if let Some(remote) = &self.fallback {
            debug!(state = ?RouteState::Classifying, engine = remote.name(), "fallback service");
            match remote.classify(text) {
                Ok(result) => {
                    debug!(state = ?RouteState::Completed, quadrant = %result.quadrant, "fallback service answered");
                    return Ok(result);
                }
                Err(e) => {
                    warn!(state = ?RouteState::Degraded, error = %e, "fallback service failed");
                    self.record_event(e.to_string(), self.heuristic.name());
                }
            }
        }

        debug!(state = ?RouteState::Classifying, engine = self.heuristic.name(), "heuristic path");
        match self.heuristic.classify(text) {
            Ok(result) => {
                debug!(state = ?RouteState::Completed, quadrant = %result.quadrant, "heuristic answered");
                Ok(result)
            }
            Err(e) => {
                warn!(state = ?RouteState::Failed, error = %e, "all paths exhausted, neutral answer");
                self.record_event(e.to_string(), "neutral-answer");
                Ok(ClassificationResult::neutral())
            }
        }
    }

    /// The complexity heuristic: short single-line texts stay on the
    /// fast path.
    fn is_simple(&self, text: &str) -> bool {
        text.chars().count() < self.config.fast_max_chars
            && !text.contains(['\n', '\t', '\r'])
    }

    fn record_event(&self, failure: String, fallback_used: &str) {
        if let Ok(mut events) = self.events.lock() {
            events.push(DegradationEvent::now("routing", failure, fallback_used));
        }
    }

    /// Drain degradation events accumulated by failed routes.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.events
            .lock()
            .map(|mut events| std::mem::take(&mut *events))
            .unwrap_or_default()
    }
}
