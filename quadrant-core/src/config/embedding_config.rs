use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Primary provider: "hashed" or "onnx".
    pub provider: String,
    /// Path to the ONNX model file (only used when provider = "onnx").
    pub model_path: String,
    /// Embedding dimensionality. All providers produce this length.
    pub dimensions: usize,
    /// Optional remote embedding backend, tried before local providers.
    pub remote_url: Option<String>,
    /// Timeout for remote embedding calls (seconds).
    pub remote_timeout_secs: u64,
    /// Max entries in the L1 query-embedding cache.
    pub l1_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_PROVIDER.to_string(),
            model_path: String::new(),
            dimensions: defaults::DEFAULT_DIMENSIONS,
            remote_url: None,
            remote_timeout_secs: defaults::DEFAULT_BACKEND_TIMEOUT_SECS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
        }
    }
}
