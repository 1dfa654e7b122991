//! Weighted vote accumulation over the four quadrants.

use quadrant_core::models::Confidence;
use quadrant_core::quadrant::QuadrantId;

/// Weight of the base vote seeding the tally.
pub const BASE_VOTE_WEIGHT: f64 = 1.0;

/// Fraction of a neighbor's similarity contributed to its quadrant.
pub const NEIGHBOR_WEIGHT: f64 = 0.6;

/// Running vote tally for one classification.
///
/// Always starts with the base vote on the default quadrant, so the tally
/// is never empty and zero-neighbor queries still produce an answer.
#[derive(Debug, Clone)]
pub struct VoteTally {
    scores: [f64; 4],
    total_weight: f64,
}

impl Default for VoteTally {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteTally {
    pub fn new() -> Self {
        let mut scores = [0.0; 4];
        scores[QuadrantId::DoNow.index()] = BASE_VOTE_WEIGHT;
        Self {
            scores,
            total_weight: BASE_VOTE_WEIGHT,
        }
    }

    /// Add one neighbor's vote: `similarity * NEIGHBOR_WEIGHT` to its
    /// quadrant, and the same amount to the normalizing denominator.
    pub fn add_neighbor(&mut self, quadrant: QuadrantId, similarity: f64) {
        let weight = similarity * NEIGHBOR_WEIGHT;
        self.scores[quadrant.index()] += weight;
        self.total_weight += weight;
    }

    /// The winning quadrant and its normalized score.
    ///
    /// Ties break to the first quadrant in `QuadrantId::ALL` order. The
    /// ordering is inherited behavior rather than a product decision; it
    /// is deterministic, nothing more.
    pub fn winner(&self) -> (QuadrantId, Confidence) {
        let mut best = QuadrantId::ALL[0];
        let mut best_score = self.scores[best.index()];

        for quadrant in &QuadrantId::ALL[1..] {
            let score = self.scores[quadrant.index()];
            if score > best_score {
                best = *quadrant;
                best_score = score;
            }
        }

        (best, Confidence::new(best_score / self.total_weight))
    }
}
