//! # quadrant-corpus
//!
//! Owns the labeled training examples: an insertion-ordered in-memory
//! store with single-writer appends, the built-in seed corpus, and JSON
//! document persistence.

pub mod persist;
pub mod seed;
pub mod store;

pub use persist::CorpusRecord;
pub use store::CorpusStore;
