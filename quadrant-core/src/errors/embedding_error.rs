/// Embedding subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("failed to load embedding model from {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("embedding backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("embedding unavailable: {detail}")]
    Unavailable { detail: String },
}
