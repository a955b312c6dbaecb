//! Inference pipeline: raw uploaded bytes to a labelled prediction.
//!
//! The pipeline is a pure function with no side effects beyond the forward
//! pass itself: decode, resize to 256x256, reshape into a single-item NHWC
//! batch, one forward pass, arg-max label lookup. Each step is a hard
//! precondition for the next.

pub mod predictor;
pub mod preprocess;

// Re-export main types for convenience
pub use predictor::{predict, PredictionResult};
pub use preprocess::image_to_tensor;
