use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Training corpus configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Document file holding the persisted corpus. When unset, the store
    /// starts from the built-in seed corpus and nothing is persisted.
    pub path: Option<PathBuf>,
}
