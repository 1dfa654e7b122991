//! Shared data models.

mod classification;
mod degradation_event;
mod example;
mod feedback;

pub use classification::{ClassificationQuery, ClassificationResult, Confidence, EngineKind};
pub use degradation_event::DegradationEvent;
pub use example::{ExampleOrigin, TrainingExample};
pub use feedback::FeedbackRecord;
