/// Training corpus store errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus file i/o error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to persist corpus to {path}: {reason}")]
    Persist { path: String, reason: String },
}
