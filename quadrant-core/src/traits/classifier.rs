use crate::errors::QuadrantResult;
use crate::models::ClassificationResult;

/// A classification path. The routing layer composes several of these:
/// the fast nearest-neighbor engine, a remote fallback service, and the
/// keyword heuristic of last resort.
pub trait IClassifier: Send + Sync {
    /// Classify a task text into a quadrant with a confidence score.
    ///
    /// Must be a pure function of the text and the (unmutated) corpus:
    /// calling twice with an unchanged corpus yields the same result.
    fn classify(&self, text: &str) -> QuadrantResult<ClassificationResult>;

    /// Human-readable engine name, used in logs and degradation events.
    fn name(&self) -> &str;
}
