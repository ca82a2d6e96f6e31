//! Sends one request through the gateway with the local echo backend.
//!
//! ```bash
//! cargo run --example local_gateway
//! ```

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use tower::ServiceExt;

use inference_gateway::config::ServerSettings;
use inference_gateway::http::{create_app, InferenceController};
use inference_gateway::inference::LocalBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let controller = InferenceController::new(Arc::new(LocalBackend::new()));
    let app = create_app(controller, &ServerSettings::default());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/inference")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"input": "x"}"#))?;

    let response = app.oneshot(request).await?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await?;

    println!("{} {}", status, String::from_utf8_lossy(&body));
    Ok(())
}
