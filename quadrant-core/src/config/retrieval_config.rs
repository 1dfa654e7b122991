use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Max neighbors returned per query.
    pub top_k: usize,
    /// Strict lower bound: neighbors with similarity <= this are dropped.
    pub min_similarity: f64,
    /// Optional remote vector-search backend. On failure the engine falls
    /// back to the local brute-force scan.
    pub backend_url: Option<String>,
    /// Timeout for backend search calls (seconds).
    pub backend_timeout_secs: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
            min_similarity: defaults::DEFAULT_MIN_SIMILARITY,
            backend_url: None,
            backend_timeout_secs: defaults::DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}
