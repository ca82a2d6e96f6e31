//! Data Transfer Objects for the HTTP API.
//!
//! Inference payloads are opaque bytes and have no DTO.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Name of the configured inference backend
    pub backend: String,
    /// Backend reachability status
    pub backend_status: String,
}
