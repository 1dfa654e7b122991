//! Configuration for every subsystem, loaded from a single TOML file.

mod corpus_config;
mod defaults;
mod embedding_config;
mod retrieval_config;
mod routing_config;

pub use corpus_config::CorpusConfig;
pub use embedding_config::EmbeddingConfig;
pub use retrieval_config::RetrievalConfig;
pub use routing_config::RoutingConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{QuadrantError, QuadrantResult};

/// Aggregate configuration. Every section has full defaults, so an empty
/// file (or no file at all) yields a working local-only setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadrantConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub routing: RoutingConfig,
    pub corpus: CorpusConfig,
}

impl QuadrantConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> QuadrantResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| QuadrantError::Config {
            reason: format!("cannot read {}: {e}", path.display()),
        })?;
        toml::from_str(&raw).map_err(|e| QuadrantError::Config {
            reason: format!("cannot parse {}: {e}", path.display()),
        })
    }
}
