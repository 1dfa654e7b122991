use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quadrant::QuadrantId;

/// A user correction: what the system predicted versus what the user said
/// was right. The corrected label is fed back into the training corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: String,
    pub task: String,
    pub predicted: QuadrantId,
    pub corrected: QuadrantId,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn new(task: impl Into<String>, predicted: QuadrantId, corrected: QuadrantId) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            task: task.into(),
            predicted,
            corrected,
            timestamp: Utc::now(),
        }
    }

    /// Whether the prediction already matched the user's correction.
    pub fn was_correct(&self) -> bool {
        self.predicted == self.corrected
    }
}
