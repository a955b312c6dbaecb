//! Leafcheck Server
//!
//! HTTP server for plant disease detection. Serves a single-page upload
//! form, runs uploaded leaf photographs through a pre-trained classifier
//! artifact, and returns the predicted label with a confidence score and a
//! treatment tip.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use leafcheck::config::ServerConfig;
use leafcheck::model;
use leafcheck::server::{self, AppState};

/// Leafcheck Plant Disease Detection Server
#[derive(Parser, Debug)]
#[command(name = "leafcheck")]
#[command(version = "0.1.0")]
#[command(about = "HTTP server for leaf disease prediction")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Path to the classifier artifact
    #[arg(
        short,
        long,
        env = "LEAFCHECK_MODEL",
        default_value = "plant_disease_model.onnx"
    )]
    model: PathBuf,

    /// Intra-op thread count for the ONNX session
    #[arg(long, default_value = "1")]
    onnx_threads: usize,

    /// Maximum accepted upload size in bytes
    #[arg(long, default_value = "10485760")]
    max_upload_bytes: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        model_path: cli.model,
        onnx_threads: cli.onnx_threads,
        max_upload_bytes: cli.max_upload_bytes,
    };

    info!("Leafcheck server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration:");
    info!("  Model path:  {:?}", config.model_path);
    info!("  Max upload:  {} bytes", config.max_upload_bytes);

    // Load the classifier once. A failed load keeps the server up; every
    // prediction then reports the model as unavailable until a restart.
    let classifier = model::load_classifier(&config.model_path, config.onnx_threads).clone();
    if let Some(diagnostic) = classifier.diagnostic() {
        warn!(
            "Classifier unavailable: {}. Predictions will fail with 503 \
             until the server is restarted with a valid artifact.",
            diagnostic
        );
    }

    // Create shared state and router
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = Arc::new(AppState::new(config, classifier));
    let app = server::router(state);

    // Start server
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
