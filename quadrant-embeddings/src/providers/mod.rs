//! Embedding provider implementations.

mod hashed_ngram;
mod onnx_provider;
mod remote;

pub use hashed_ngram::HashedNgramProvider;
pub use onnx_provider::OnnxProvider;
pub use remote::RemoteEmbeddingProvider;

use quadrant_core::config::EmbeddingConfig;
use quadrant_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Create the configured local provider.
///
/// Falls back to the hashed n-gram provider when the ONNX model cannot be
/// loaded, so construction never fails.
pub fn create_local_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "onnx" => match OnnxProvider::load(&config.model_path, config.dimensions) {
            Ok(provider) => Box::new(provider),
            Err(e) => {
                warn!(
                    model_path = %config.model_path,
                    error = %e,
                    "ONNX provider unavailable, using hashed n-gram provider"
                );
                Box::new(HashedNgramProvider::new(config.dimensions))
            }
        },
        other => {
            if other != "hashed" {
                warn!(provider = other, "unknown provider name, using hashed n-gram provider");
            }
            Box::new(HashedNgramProvider::new(config.dimensions))
        }
    }
}
