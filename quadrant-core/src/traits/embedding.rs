use crate::errors::QuadrantResult;

/// Embedding generation provider.
///
/// Implementations must be safe to call concurrently: read-only after
/// initialization, or internally synchronized.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a fixed-dimension vector.
    fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
