//! Error types for the leafcheck library.
//!
//! Uses thiserror for ergonomic error definitions. Every variant maps to a
//! distinct human-readable message at the HTTP boundary; none should escape
//! as an unhandled fault that terminates the process.

use thiserror::Error;

/// Main error type for leafcheck operations
#[derive(Error, Debug)]
pub enum Error {
    /// Classifier artifact could not be deserialized. Permanent for the
    /// process; restart is the only recovery path.
    #[error("Model load error: {0}")]
    ModelLoad(String),

    /// A prediction was requested while no classifier is loaded
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Uploaded bytes are not a decodable JPEG/PNG image
    #[error("Image decode error: {0}")]
    Decode(String),

    /// Resize/reshape or the score vector violated the expected dimensions
    #[error("Shape error: {0}")]
    Shape(String),

    /// The forward pass itself failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

/// Specialized Result type for leafcheck operations.
pub type Result<T> = std::result::Result<T, Error>;
