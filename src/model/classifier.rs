//! Classifier trait and the ONNX Runtime implementation.

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array4;
use ort::session::{builder::GraphOptimizationLevel, Session};
use tracing::info;

use crate::error::{Error, Result};

/// A black-box classifier: one forward pass from an input tensor to a
/// vector of per-class scores.
///
/// Implementations must be safe to share across request handlers; the
/// forward pass must not mutate shared model state observable to callers.
pub trait Classifier: Send + Sync {
    /// Run one forward pass on a single-item NHWC batch and return the raw
    /// score vector. Scores are relative confidence and need not sum to 1.
    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>>;
}

/// Classifier backed by an ONNX Runtime session.
#[derive(Debug)]
pub struct OnnxClassifier {
    /// `Session::run` takes `&mut self`, so concurrent requests serialize
    /// around the forward pass only. Decode and resize run unguarded.
    session: Mutex<Session>,
    /// Input name for the model
    input_name: String,
    /// Output name for the score vector
    output_name: String,
}

impl OnnxClassifier {
    /// Deserialize an ONNX artifact into an invocable session.
    pub fn load(path: &Path, intra_threads: usize) -> Result<Self> {
        let session = build_session(path, intra_threads).map_err(|e| {
            Error::ModelLoad(format!(
                "failed to load classifier from {}: {}",
                path.display(),
                e
            ))
        })?;

        let input_name = session
            .inputs
            .first()
            .map(|i| i.name.clone())
            .unwrap_or_else(|| "input".to_string());

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .unwrap_or_else(|| "output".to_string());

        info!(
            path = %path.display(),
            input = %input_name,
            output = %output_name,
            "Classifier artifact loaded"
        );

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
        })
    }
}

fn build_session(path: &Path, intra_threads: usize) -> std::result::Result<Session, ort::Error> {
    ort::init().commit()?;
    Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(intra_threads)?
        .commit_from_file(path)
}

impl Classifier for OnnxClassifier {
    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>> {
        use ort::value::Tensor;

        let (batch, height, width, channels) = input.dim();
        let shape = vec![batch as i64, height as i64, width as i64, channels as i64];
        let data: Vec<f32> = input.iter().copied().collect();

        let input_tensor = Tensor::from_array((shape, data))
            .map_err(|e| Error::Inference(format!("failed to create input tensor: {e}")))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| Error::Inference("classifier lock poisoned".to_string()))?;

        let outputs = session
            .run(ort::inputs![&self.input_name => input_tensor])
            .map_err(|e| Error::Inference(e.to_string()))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            Error::Inference(format!(
                "output '{}' missing from session outputs",
                self.output_name
            ))
        })?;

        let (_, scores) = output
            .try_extract_tensor::<f32>()
            .map_err(|e| Error::Inference(e.to_string()))?;

        Ok(scores.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_artifact_is_model_load_error() {
        let err = OnnxClassifier::load(Path::new("does/not/exist.onnx"), 1)
            .expect_err("missing artifact must not load");
        assert!(matches!(err, Error::ModelLoad(_)));
        assert!(err.to_string().contains("does/not/exist.onnx"));
    }

    #[test]
    fn test_load_corrupt_artifact_is_model_load_error() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(b"not an onnx graph").expect("write temp file");

        let err = OnnxClassifier::load(file.path(), 1).expect_err("corrupt artifact must not load");
        assert!(matches!(err, Error::ModelLoad(_)));
    }
}
