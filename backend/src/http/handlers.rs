//! HTTP handlers for the REST API.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use std::time::Instant;
use tracing::{info, warn};

use super::dto::HealthResponse;
use super::error::AppError;
use super::state::InferenceController;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports the service as up together with the backend's reachability.
pub async fn health_check(State(controller): State<InferenceController>) -> HandlerResult<HealthResponse> {
    let backend_status = match controller.backend.health_check().await {
        Ok(true) => "reachable".to_string(),
        Ok(false) => "unreachable".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        backend: controller.backend.name().to_string(),
        backend_status,
    }))
}

// =============================================================================
// Inference
// =============================================================================

/// POST /inference
///
/// Forwards the raw request body to the inference backend and writes the
/// backend's answer back with its content type.
pub async fn post_inference(
    State(controller): State<InferenceController>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = controller.inference_request(&headers, body);
    let request_bytes = request.body.len();
    let started = Instant::now();

    let output = controller.backend.invoke(request).await.map_err(|e| {
        warn!(
            backend = controller.backend.name(),
            error = %e,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference request failed"
        );
        AppError::from(e)
    })?;

    info!(
        backend = controller.backend.name(),
        request_bytes,
        response_bytes = output.body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "inference request completed"
    );

    Ok(([(header::CONTENT_TYPE, output.content_type)], output.body).into_response())
}
