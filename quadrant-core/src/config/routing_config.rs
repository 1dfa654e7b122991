use serde::{Deserialize, Serialize};

use super::defaults;

/// Routing layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Texts shorter than this (and without embedded control whitespace)
    /// take the fast in-process path; everything else falls back.
    pub fast_max_chars: usize,
    /// Optional external fallback classification service.
    pub fallback_url: Option<String>,
    /// Timeout for fallback service calls (seconds).
    pub fallback_timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            fast_max_chars: defaults::DEFAULT_FAST_MAX_CHARS,
            fallback_url: None,
            fallback_timeout_secs: defaults::DEFAULT_BACKEND_TIMEOUT_SECS,
        }
    }
}
