//! L1 in-memory cache for query embeddings.
//!
//! Keyed by blake3 content hash; values are embedding vectors. Lock-free
//! reads via moka's sync cache.

use std::time::Duration;

use moka::sync::Cache;

/// Derive the cache key for a text.
pub fn content_key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// In-memory embedding cache.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .time_to_live(Duration::from_secs(86400))
            .build();
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) {
        self.cache.insert(key, embedding);
    }

    /// Drop every entry. Used on retrain, when cached vectors may no
    /// longer match the active embedding model.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get_round_trip() {
        let cache = QueryCache::new(16);
        let key = content_key("buy groceries");
        cache.insert(key.clone(), vec![0.1, 0.2]);
        assert_eq!(cache.get(&key), Some(vec![0.1, 0.2]));
    }

    #[test]
    fn miss_returns_none() {
        let cache = QueryCache::new(16);
        assert_eq!(cache.get(&content_key("nothing here")), None);
    }

    #[test]
    fn distinct_texts_get_distinct_keys() {
        assert_ne!(content_key("plan sprint"), content_key("plan sprint "));
    }

    #[test]
    fn clear_invalidates_entries() {
        let cache = QueryCache::new(16);
        let key = content_key("stale");
        cache.insert(key.clone(), vec![1.0]);
        cache.clear();
        assert_eq!(cache.get(&key), None);
    }
}
