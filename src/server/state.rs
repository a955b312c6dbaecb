//! Shared application state for the leafcheck server.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::model::ClassifierHandle;

/// Shared application state
pub struct AppState {
    /// Server configuration
    pub config: ServerConfig,
    /// Process-wide classifier handle, shared read-only across requests
    pub classifier: ClassifierHandle,
    /// Server start time
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig, classifier: ClassifierHandle) -> Self {
        Self {
            config,
            classifier,
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

pub type SharedState = Arc<AppState>;
