//! # Leafcheck
//!
//! A Rust service for plant disease detection from leaf photographs.
//! A single-page web form uploads an image, the server runs it through a
//! pre-trained classifier artifact, and the response carries the predicted
//! plant/disease label with a confidence score and a static treatment tip.
//!
//! ## Modules
//!
//! - `classes`: the fixed class label table (ordering matches the artifact's output vector)
//! - `model`: classifier artifact loading and the process-wide handle cache
//! - `inference`: decode, resize, tensor reshape, forward pass, arg-max
//! - `server`: axum HTTP layer (upload form, prediction endpoint, health)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leafcheck::{load_classifier, predict};
//!
//! let handle = load_classifier("plant_disease_model.onnx".as_ref(), 1);
//! let result = predict(handle, &uploaded_bytes)?;
//! println!("{} / {} ({:.2}%)", result.plant_name, result.disease_name, result.confidence_percent);
//! ```

pub mod classes;
pub mod config;
pub mod error;
pub mod inference;
pub mod model;
pub mod server;

// Re-export commonly used items for convenience
pub use classes::{CLASS_NAMES, NUM_CLASSES};
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use inference::{predict, PredictionResult};
pub use model::{load_classifier, Classifier, ClassifierHandle, ModelCache};

/// Input edge length the classifier artifact was trained on.
pub const IMAGE_SIZE: usize = 256;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
