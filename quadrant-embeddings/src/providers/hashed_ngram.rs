//! Hashed n-gram embedding provider.
//!
//! Maps unigrams and bigrams into fixed-dimension buckets via FNV-1a and
//! weights them by dampened term frequency. Deterministic, dependency-free,
//! always available — the last link of every fallback chain.

use std::collections::HashMap;

use quadrant_core::errors::QuadrantResult;
use quadrant_core::traits::IEmbeddingProvider;

/// Always-available embedding provider over hashed term buckets.
///
/// Not as semantically rich as a neural model, but close variants of the
/// same task text still land in overlapping buckets, which is what the
/// nearest-neighbor classifier needs.
pub struct HashedNgramProvider {
    dimensions: usize,
}

impl HashedNgramProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Lowercase alphanumeric tokens, keeping anything of two chars or more.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// FNV-1a bucket index for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return vec![0.0; self.dimensions];
        }

        // Unigrams plus adjacent-pair bigrams, counted together.
        let mut counts: HashMap<String, f32> = HashMap::new();
        for tok in &tokens {
            *counts.entry(tok.clone()).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            *counts.entry(format!("{} {}", pair[0], pair[1])).or_default() += 1.0;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &counts {
            // Dampened frequency, longer terms weighted up: with no
            // stop-word list, this keeps filler tokens from dominating.
            let weight = count.sqrt() * (1.0 + (term.chars().count() as f32).ln());
            vec[Self::bucket(term, self.dimensions)] += weight;
        }

        // L2 normalize.
        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedNgramProvider {
    fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-ngram"
    }

    fn is_available(&self) -> bool {
        true
    }
}
