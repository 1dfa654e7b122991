//! Keyword-heuristic classifier of last resort.
//!
//! Scores urgency and importance from fixed keyword tables (English and
//! Polish, matching the seed corpus vocabulary) and derives the quadrant
//! from the two booleans. Never fails, never touches the corpus or the
//! embedding provider — this is the path that keeps answers flowing when
//! everything else is down.

use quadrant_core::errors::QuadrantResult;
use quadrant_core::models::{ClassificationResult, Confidence, EngineKind};
use quadrant_core::quadrant::QuadrantId;
use quadrant_core::traits::IClassifier;
use tracing::debug;

/// Signals that a task is time-pressed.
const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "now",
    "asap",
    "immediately",
    "today",
    "tonight",
    "tomorrow",
    "deadline",
    "emergency",
    "critical",
    "pilny",
    "pilne",
    "zaraz",
    "natychmiast",
    "jutro",
    "termin",
];

/// Signals that a task carries lasting weight.
const IMPORTANT_KEYWORDS: &[&str] = &[
    "critical",
    "important",
    "report",
    "strategy",
    "strategize",
    "plan",
    "goal",
    "goals",
    "project",
    "prepare",
    "emergency",
    "ważne",
    "krytyczny",
    "raport",
    "strategia",
    "strategię",
    "projekt",
    "przygotuj",
];

/// Keyword-table classifier.
pub struct KeywordClassifier;

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn keyword_hits(text_lower: &str, keywords: &[&str]) -> usize {
        keywords.iter().filter(|kw| text_lower.contains(*kw)).count()
    }
}

impl IClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> QuadrantResult<ClassificationResult> {
        let lower = text.to_lowercase();
        let urgent_hits = Self::keyword_hits(&lower, URGENT_KEYWORDS);
        let important_hits = Self::keyword_hits(&lower, IMPORTANT_KEYWORDS);

        let quadrant = match (urgent_hits > 0, important_hits > 0) {
            (true, true) => QuadrantId::DoNow,
            (true, false) => QuadrantId::Schedule,
            (false, true) => QuadrantId::Delegate,
            (false, false) => QuadrantId::Delete,
        };

        // Low baseline, rising with corroborating keywords but capped
        // well below what the neighbor vote can express.
        let hits = urgent_hits + important_hits;
        let confidence = if hits == 0 {
            0.25
        } else {
            (0.35 + 0.1 * hits as f64).min(0.8)
        };

        debug!(%quadrant, urgent_hits, important_hits, "keyword heuristic vote");

        Ok(ClassificationResult {
            quadrant,
            confidence: Confidence::new(confidence),
            neighbors_used: 0,
            engine: EngineKind::Fallback,
        })
    }

    fn name(&self) -> &str {
        "keyword-heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_and_important_lands_in_do_now() {
        let result = KeywordClassifier::new()
            .classify("urgent: prepare critical report today")
            .unwrap();
        assert_eq!(result.quadrant, QuadrantId::DoNow);
        assert_eq!(result.engine, EngineKind::Fallback);
    }

    #[test]
    fn urgency_alone_schedules() {
        let result = KeywordClassifier::new()
            .classify("call the dentist tomorrow")
            .unwrap();
        assert_eq!(result.quadrant, QuadrantId::Schedule);
    }

    #[test]
    fn importance_alone_delegates() {
        let result = KeywordClassifier::new()
            .classify("strategize the project roadmap")
            .unwrap();
        assert_eq!(result.quadrant, QuadrantId::Delegate);
    }

    #[test]
    fn no_signals_means_delete() {
        let result = KeywordClassifier::new().classify("browse cat pictures").unwrap();
        assert_eq!(result.quadrant, QuadrantId::Delete);
        assert_eq!(result.confidence.value(), 0.25);
    }

    #[test]
    fn polish_keywords_are_recognized() {
        let result = KeywordClassifier::new()
            .classify("pilny termin: przygotuj raport")
            .unwrap();
        assert_eq!(result.quadrant, QuadrantId::DoNow);
    }

    #[test]
    fn confidence_grows_with_hits_but_stays_capped() {
        let classifier = KeywordClassifier::new();
        let one = classifier.classify("plan something").unwrap();
        let many = classifier
            .classify("urgent critical deadline: prepare report now")
            .unwrap();
        assert!(many.confidence.value() > one.confidence.value());
        assert!(many.confidence.value() <= 0.8);
    }
}
