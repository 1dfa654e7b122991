//! Classification inputs and outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::quadrant::QuadrantId;

/// A classification request. No persisted identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationQuery {
    pub text: String,
}

impl ClassificationQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reject empty or whitespace-only task text.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        Ok(())
    }
}

/// Confidence score clamped to [0.0, 1.0]: the normalized vote weight of
/// the winning quadrant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a new Confidence, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Which classification path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// The in-process nearest-neighbor classifier.
    Fast,
    /// Any of the fallback paths (remote service, keyword heuristic,
    /// neutral answer).
    Fallback,
}

impl EngineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EngineKind::Fast => "fast",
            EngineKind::Fallback => "fallback",
        }
    }
}

/// The outcome of a single classification. Produced per query, not
/// persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub quadrant: QuadrantId,
    pub confidence: Confidence,
    pub neighbors_used: usize,
    pub engine: EngineKind,
}

impl ClassificationResult {
    /// The neutral answer returned when every classification path has been
    /// exhausted: default quadrant, zero confidence. Keeps the caller's
    /// workflow unblocked instead of surfacing an error.
    pub fn neutral() -> Self {
        Self {
            quadrant: QuadrantId::DoNow,
            confidence: Confidence::new(0.0),
            neighbors_used: 0,
            engine: EngineKind::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_clamps_to_unit_interval() {
        assert_eq!(Confidence::new(1.7).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(0.42).value(), 0.42);
    }

    #[test]
    fn blank_query_fails_validation() {
        assert!(ClassificationQuery::new("   ").validate().is_err());
        assert!(ClassificationQuery::new("").validate().is_err());
        assert!(ClassificationQuery::new("ship the release").validate().is_ok());
    }

    #[test]
    fn neutral_answer_is_do_now_with_zero_confidence() {
        let neutral = ClassificationResult::neutral();
        assert_eq!(neutral.quadrant, QuadrantId::DoNow);
        assert_eq!(neutral.confidence.value(), 0.0);
        assert_eq!(neutral.engine, EngineKind::Fallback);
    }

    #[test]
    fn engine_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EngineKind::Fast).unwrap(), "\"fast\"");
        assert_eq!(
            serde_json::to_string(&EngineKind::Fallback).unwrap(),
            "\"fallback\""
        );
    }
}
