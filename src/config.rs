//! Server configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Path to the serialized classifier artifact
    pub model_path: PathBuf,
    /// Intra-op thread count for the ONNX session
    pub onnx_threads: usize,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            model_path: PathBuf::from("plant_disease_model.onnx"),
            onnx_threads: 1,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.onnx_threads, 1);
        assert_eq!(config.model_path, PathBuf::from("plant_disease_model.onnx"));
    }
}
