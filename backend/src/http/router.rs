//! Router configuration for the HTTP API.
//!
//! [`inference_router`] holds the single inference route and is what gets
//! mounted; [`create_app`] is the hosting process's full application with
//! health check and middleware.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::InferenceController;
use crate::config::ServerSettings;

/// Path of the inference route inside its router.
pub const INFERENCE_PATH: &str = "/inference";

/// Prefix the hosting process mounts the inference router under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the inference router: `POST /inference` bound to the controller.
///
/// Builds a fresh routing table on every call and touches nothing else.
pub fn inference_router(controller: InferenceController) -> Router {
    Router::new()
        .route(INFERENCE_PATH, post(handlers::post_inference))
        .with_state(controller)
}

/// Create the main application router with all routes and middleware.
pub fn create_app(controller: InferenceController, settings: &ServerSettings) -> Router {
    // CORS configuration - permissive, the gateway sits behind the site's own origin policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .with_state(controller.clone())
        .nest(API_PREFIX, inference_router(controller))
        .layer(DefaultBodyLimit::max(settings.body_limit_bytes))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
