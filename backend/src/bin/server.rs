//! Inference Gateway HTTP Server Binary
//!
//! Loads configuration, builds the inference backend, mounts the inference
//! router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local echo backend (default when no endpoint is set)
//! cargo run --bin inference-server
//!
//! # Forward to a remote inference endpoint
//! INFERENCE_ENDPOINT_URL=https://runtime.example.com/endpoints/demo/invocations \
//!   cargo run --bin inference-server
//! ```
//!
//! # Environment Variables
//!
//! - `GATEWAY_CONFIG`: path to a `gateway.toml` file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `INFERENCE_BACKEND`: `http` or `local`
//! - `INFERENCE_ENDPOINT_URL`: remote inference endpoint
//! - `INFERENCE_TIMEOUT_SECS`: per-request timeout (default: 60)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use inference_gateway::config::GatewayConfig;
use inference_gateway::http::{create_app, InferenceController, API_PREFIX, INFERENCE_PATH};
use inference_gateway::inference::BackendFactory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting inference gateway");

    let config = GatewayConfig::load()?;
    let backend = BackendFactory::from_settings(&config.backend)?;
    info!(backend = backend.name(), "Inference backend initialized");

    let controller = InferenceController::with_settings(backend, &config.backend);
    let app = create_app(controller, &config.server);

    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Inference route: POST http://{}{}{}", addr, API_PREFIX, INFERENCE_PATH);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
