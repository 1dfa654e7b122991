//! Corpus document persistence.
//!
//! The corpus file is a JSON array of `{ "text": ..., "quadrant": 0..3 }`
//! records. Records are validated individually at load time; a malformed
//! entry fails the load with the offending index rather than being
//! silently coerced or skipped.

use std::path::Path;

use quadrant_core::errors::{CorpusError, QuadrantResult, ValidationError};
use quadrant_core::models::ExampleOrigin;
use quadrant_core::quadrant::QuadrantId;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::store::CorpusStore;

/// One persisted training record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub text: String,
    pub quadrant: QuadrantId,
}

/// Load and validate corpus records from a JSON document file.
pub fn load(path: impl AsRef<Path>) -> QuadrantResult<Vec<CorpusRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let values: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|e| ValidationError::MalformedRecord {
            index: 0,
            reason: format!("document is not a JSON array of records: {e}"),
        })?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        records.push(parse_record(index, value)?);
    }

    info!(path = %path.display(), records = records.len(), "corpus loaded");
    Ok(records)
}

/// Persist the store's current examples to a JSON document file.
pub fn save(path: impl AsRef<Path>, store: &CorpusStore) -> QuadrantResult<()> {
    let path = path.as_ref();
    let records: Vec<CorpusRecord> = store
        .all_examples()
        .iter()
        .map(|e| CorpusRecord {
            text: e.text.clone(),
            quadrant: e.quadrant,
        })
        .collect();

    let json =
        serde_json::to_string_pretty(&records).map_err(|e| CorpusError::Persist {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    std::fs::write(path, json).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;

    info!(path = %path.display(), records = records.len(), "corpus saved");
    Ok(())
}

/// Populate a store from loaded records. Loaded records count as seed
/// data: a retrain without feedback preservation falls back to the
/// built-in seed set, not the file.
pub fn populate(store: &CorpusStore, records: Vec<CorpusRecord>) {
    for record in records {
        store.add_example(record.text, record.quadrant, ExampleOrigin::Seed);
    }
}

fn parse_record(index: usize, value: serde_json::Value) -> QuadrantResult<CorpusRecord> {
    let malformed = |reason: String| ValidationError::MalformedRecord { index, reason };

    let obj = value
        .as_object()
        .ok_or_else(|| malformed("record is not an object".to_string()))?;

    let text = obj
        .get("text")
        .and_then(|v| v.as_str())
        .ok_or_else(|| malformed("missing or non-string \"text\" field".to_string()))?;
    if text.trim().is_empty() {
        return Err(malformed("\"text\" is empty".to_string()).into());
    }

    let quadrant_raw = obj
        .get("quadrant")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| malformed("missing or non-integer \"quadrant\" field".to_string()))?;
    let quadrant = u8::try_from(quadrant_raw)
        .ok()
        .and_then(|b| QuadrantId::try_from(b).ok())
        .ok_or_else(|| malformed(format!("quadrant id {quadrant_raw} out of range")))?;

    Ok(CorpusRecord {
        text: text.to_string(),
        quadrant,
    })
}
