//! # quadrant-embeddings
//!
//! Converts free text into fixed-length vectors and compares them.
//! Providers are arranged in a fallback chain (remote backend → ONNX →
//! hashed n-grams) so embedding is available even with no model and no
//! network; every fallback is recorded as a degradation event.

pub mod cache;
pub mod chain;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use chain::ProviderChain;
pub use engine::EmbeddingEngine;
pub use similarity::cosine;
