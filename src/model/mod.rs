//! Model loading and the classifier seam.
//!
//! The classifier artifact is opaque: it is deserialized once per process
//! and used purely as a function from input tensor to score vector. The
//! [`Classifier`] trait is the seam that keeps the rest of the pipeline
//! independent of the runtime backing the artifact.

pub mod classifier;
pub mod loader;

pub use classifier::{Classifier, OnnxClassifier};
pub use loader::{load_classifier, ClassifierHandle, ModelCache};
