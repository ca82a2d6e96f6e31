//! In-process inference backend.
//!
//! Echoes every request back unchanged. Used for local development and as
//! the default when no remote endpoint is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use super::backend::{InferenceBackend, InferenceOutput, InferenceRequest};
use super::error::BackendResult;

/// Echo backend.
#[derive(Debug, Default)]
pub struct LocalBackend {
    invocations: AtomicU64,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls served so far.
    pub fn invocation_count(&self) -> u64 {
        self.invocations.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl InferenceBackend for LocalBackend {
    fn name(&self) -> &str {
        "local"
    }

    async fn invoke(&self, request: InferenceRequest) -> BackendResult<InferenceOutput> {
        self.invocations.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(bytes = request.body.len(), "local backend echoing request");
        Ok(InferenceOutput::new(request.body, request.content_type))
    }

    async fn health_check(&self) -> BackendResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_backend_echoes_body_and_content_type() {
        let backend = LocalBackend::new();
        let request = InferenceRequest::new(r#"{"input": "x"}"#).with_content_type("text/csv");

        let output = backend.invoke(request).await.unwrap();

        assert_eq!(output.body.as_ref(), br#"{"input": "x"}"#);
        assert_eq!(output.content_type, "text/csv");
        assert_eq!(backend.invocation_count(), 1);
    }

    #[tokio::test]
    async fn test_local_backend_is_healthy() {
        assert!(LocalBackend::new().health_check().await.unwrap());
    }
}
