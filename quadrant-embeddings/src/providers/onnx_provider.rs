//! ONNX embedding provider via the `ort` crate.
//!
//! Intended for MiniLM-class sentence encoders (384 dims). The session is
//! loaded once at startup and treated as immutable for the process
//! lifetime.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use quadrant_core::errors::{EmbeddingError, QuadrantResult};
use quadrant_core::traits::IEmbeddingProvider;
use tracing::debug;

/// Local neural embedding provider.
///
/// `Session::run` needs `&mut`, so the session sits behind a `Mutex` to
/// satisfy the `&self` provider contract under concurrent requests.
pub struct OnnxProvider {
    session: Mutex<Session>,
    dimensions: usize,
    model_name: String,
}

// Safety: Session is Send; the Mutex provides the Sync the trait requires.
unsafe impl Sync for OnnxProvider {}

impl OnnxProvider {
    /// Load an ONNX model from disk.
    ///
    /// # Errors
    /// `EmbeddingError::ModelLoadFailed` when the file is missing or the
    /// session cannot be built.
    pub fn load(model_path: &str, dimensions: usize) -> QuadrantResult<Self> {
        let load_err = |reason: String| EmbeddingError::ModelLoadFailed {
            path: model_path.to_string(),
            reason,
        };

        let path = Path::new(model_path);
        if !path.exists() {
            return Err(load_err("model file not found".to_string()).into());
        }

        let session = Session::builder()
            .map_err(|e| load_err(e.to_string()))?
            .with_intra_threads(2)
            .map_err(|e| load_err(e.to_string()))?
            .commit_from_file(model_path)
            .map_err(|e| load_err(e.to_string()))?;

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %model_name, dims = dimensions, "ONNX embedding model loaded");

        Ok(Self {
            session: Mutex::new(session),
            dimensions,
            model_name,
        })
    }

    /// Hash-tokenize: [CLS], one vocab id per word, [SEP].
    fn token_ids(text: &str) -> Vec<i64> {
        let mut ids = vec![101i64];
        for word in text.split(|c: char| !c.is_alphanumeric()) {
            if word.is_empty() {
                continue;
            }
            let mut h: u32 = 0x811c9dc5;
            for b in word.to_lowercase().as_bytes() {
                h ^= *b as u32;
                h = h.wrapping_mul(0x01000193);
            }
            ids.push(1 + (h % 29999) as i64);
        }
        ids.push(102);
        ids
    }

    fn infer(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        let infer_err = |reason: String| EmbeddingError::InferenceFailed { reason };

        let input_ids = Self::token_ids(text);
        let seq_len = input_ids.len();
        let attention_mask = vec![1i64; seq_len];

        let ids_tensor = Tensor::from_array((vec![1i64, seq_len as i64], input_ids))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;
        let mask_tensor = Tensor::from_array((vec![1i64, seq_len as i64], attention_mask))
            .map_err(|e| infer_err(format!("tensor creation error: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| infer_err(format!("session lock poisoned: {e}")))?;

        let outputs = session
            .run(ort::inputs![ids_tensor, mask_tensor])
            .map_err(|e| infer_err(e.to_string()))?;

        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| infer_err("no output tensor".to_string()))?;

        let (shape, data) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| infer_err(format!("tensor extraction failed: {e}")))?;

        // Token-level output gets mean-pooled; sentence-level output is
        // taken as-is.
        let mut pooled = match shape.len() {
            3 => {
                let seq = shape[1] as usize;
                let dims = shape[2] as usize;
                let mut acc = vec![0.0f32; dims];
                for s in 0..seq {
                    for d in 0..dims {
                        acc[d] += data[s * dims + d];
                    }
                }
                for v in &mut acc {
                    *v /= seq as f32;
                }
                acc
            }
            2 => {
                let dims = shape[1] as usize;
                data[..dims].to_vec()
            }
            _ => return Err(infer_err(format!("unexpected output shape: {shape:?}")).into()),
        };

        let norm: f32 = pooled.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut pooled {
                *v /= norm;
            }
        }

        pooled.resize(self.dimensions, 0.0);
        Ok(pooled)
    }
}

impl IEmbeddingProvider for OnnxProvider {
    fn embed(&self, text: &str) -> QuadrantResult<Vec<f32>> {
        self.infer(text)
    }

    fn embed_batch(&self, texts: &[String]) -> QuadrantResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.infer(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model_name
    }

    fn is_available(&self) -> bool {
        true
    }
}
