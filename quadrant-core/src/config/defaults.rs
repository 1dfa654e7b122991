//! Default values shared by the config structs.

/// Embedding vector dimensionality (MiniLM-class models).
pub const DEFAULT_DIMENSIONS: usize = 384;

/// Default embedding provider: the hashed n-gram provider, which needs no
/// model file and is always available.
pub const DEFAULT_PROVIDER: &str = "hashed";

/// Max entries in the L1 query-embedding cache.
pub const DEFAULT_L1_CACHE_SIZE: u64 = 2048;

/// Neighbors retrieved per query.
pub const DEFAULT_TOP_K: usize = 5;

/// Strict lower similarity bound for retrieved neighbors.
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.3;

/// Timeout applied to every outbound HTTP call (embedding backend,
/// vector-search backend, fallback classifier).
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 5;

/// Texts at or above this length route to the fallback path.
pub const DEFAULT_FAST_MAX_CHARS: usize = 1000;
