//! Backend trait for model inference.
//!
//! The HTTP handler only ever talks to an [`InferenceBackend`]; concrete
//! implementations decide how the payload reaches a model.

use async_trait::async_trait;
use bytes::Bytes;

use super::error::BackendResult;

/// Default media type for request and response payloads.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// A single inference call.
///
/// `body` is forwarded exactly as received by the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceRequest {
    pub body: Bytes,
    pub content_type: String,
    pub accept: String,
}

impl InferenceRequest {
    /// Create a request with JSON content type and accept headers.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: body.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            accept: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }
}

/// Result of a successful inference call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceOutput {
    pub body: Bytes,
    pub content_type: String,
}

impl InferenceOutput {
    pub fn new(body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }
}

/// Backend capable of running model inference.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Short identifier used in logs and the health endpoint.
    fn name(&self) -> &str;

    /// Run one inference call.
    async fn invoke(&self, request: InferenceRequest) -> BackendResult<InferenceOutput>;

    /// Report whether the backend is usable.
    ///
    /// Must not run a model; implementations only check reachability.
    async fn health_check(&self) -> BackendResult<bool>;
}
