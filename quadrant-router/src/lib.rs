//! # quadrant-router
//!
//! The single entry point in front of the classification engines. Routes
//! each request to the fast in-process path or the fallback ladder,
//! tracks fast-engine health, and guarantees an answer: only invalid
//! input ever surfaces as an error.

pub mod heuristic;
pub mod remote;
pub mod router;
pub mod service;

pub use heuristic::KeywordClassifier;
pub use remote::RemoteClassifier;
pub use router::ClassificationRouter;
pub use service::ClassificationService;
