//! EmbeddingEngine — the crate's main entry point.
//!
//! Wires the provider fallback chain to the L1 query cache behind the
//! `IEmbeddingProvider` trait, so the rest of the system sees one provider
//! that is always available and safe to call concurrently.

use quadrant_core::config::EmbeddingConfig;
use quadrant_core::errors::QuadrantResult;
use quadrant_core::models::DegradationEvent;
use quadrant_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::{content_key, QueryCache};
use crate::chain::ProviderChain;
use crate::providers;

/// Chain + cache behind a single provider interface.
pub struct EmbeddingEngine {
    chain: ProviderChain,
    cache: QueryCache,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Build the engine from configuration.
    ///
    /// Chain order: remote backend (when configured) → configured local
    /// provider → hashed n-grams. The hashed provider is always appended
    /// last, so the chain can never be exhausted by collaborator outages.
    pub fn new(config: &EmbeddingConfig) -> Self {
        let mut chain = ProviderChain::new();

        if let Some(url) = &config.remote_url {
            match providers::RemoteEmbeddingProvider::new(
                url,
                config.remote_timeout_secs,
                config.dimensions,
            ) {
                Ok(remote) => chain.push(Box::new(remote)),
                Err(e) => {
                    tracing::warn!(error = %e, "remote embedding backend not usable, skipping");
                }
            }
        }

        chain.push(providers::create_local_provider(config));

        // Last resort, even if the configured local provider is already
        // the hashed one — the first available provider wins, so a
        // duplicate tail entry is harmless.
        chain.push(Box::new(providers::HashedNgramProvider::new(
            config.dimensions,
        )));

        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "embedding engine initialized"
        );

        Self {
            chain,
            cache: QueryCache::new(config.l1_cache_size),
            dimensions: config.dimensions,
        }
    }

    /// Drain degradation events accumulated by the fallback chain.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    /// Invalidate all cached embeddings. Called on retrain.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Name of the provider currently answering.
    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        let key = content_key(text);
        if let Some(vec) = self.cache.get(&key) {
            debug!(key = %key, "embedding cache hit");
            return Ok(vec);
        }

        let vec = self.chain.embed(text)?;
        self.cache.insert(key, vec.clone());
        Ok(vec)
    }

    fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
        // Batches come from corpus loading; individual lookups dominate
        // the query path, so only that path is cached.
        self.chain.embed_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "embedding-engine"
    }

    fn is_available(&self) -> bool {
        // The hashed tail provider never fails.
        true
    }
}
