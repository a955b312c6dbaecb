//! HTTP presentation layer.
//!
//! Explicit request handlers keyed on discrete events: the page load serves
//! the form, the submit posts the image, each error kind renders its own
//! message. All pipeline errors are recovered here; nothing terminates the
//! process.

pub mod advisory;
pub mod routes;
pub mod state;

pub use state::{AppState, SharedState};

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router with the shared state and middleware stack.
pub fn router(state: SharedState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        // Single-page form
        .route("/", get(routes::index::index))
        // Health check
        .route("/health", get(routes::health::health_check))
        // Prediction
        .route("/predict", post(routes::predict::predict_image))
        // Class table
        .route("/classes", get(routes::classes::list_classes))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
