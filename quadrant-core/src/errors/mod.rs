//! Error taxonomy for the classification system.
//!
//! One enum per subsystem, unified under [`QuadrantError`]. Embedding and
//! retrieval failures are recoverable (the routing layer falls back);
//! validation failures surface directly to the caller.

mod corpus_error;
mod embedding_error;
mod retrieval_error;
mod validation_error;

pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use validation_error::ValidationError;

/// Convenience alias used across the workspace.
pub type QuadrantResult<T> = Result<T, QuadrantError>;

/// Top-level error type unifying all subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum QuadrantError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("fallback classifier unavailable: {reason}")]
    FallbackUnavailable { reason: String },

    #[error("config error: {reason}")]
    Config { reason: String },
}

impl QuadrantError {
    /// Whether the routing layer may recover from this error by falling
    /// back to another classification path. Validation errors are client
    /// errors and must not be retried.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, QuadrantError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_not_recoverable() {
        let err = QuadrantError::from(ValidationError::EmptyTask);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn embedding_failure_is_recoverable() {
        let err = QuadrantError::from(EmbeddingError::Unavailable {
            detail: "all providers exhausted".to_string(),
        });
        assert!(err.is_recoverable());
    }
}
