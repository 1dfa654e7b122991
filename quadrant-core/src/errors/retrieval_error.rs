/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("vector search backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("similarity search failed: {reason}")]
    SearchFailed { reason: String },
}
