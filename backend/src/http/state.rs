//! Handler capabilities for the inference route.

use axum::http::{header, HeaderMap};
use bytes::Bytes;
use std::sync::Arc;

use crate::config::BackendSettings;
use crate::inference::backend::DEFAULT_CONTENT_TYPE;
use crate::inference::{InferenceBackend, InferenceRequest};

/// Everything the inference handler needs, passed explicitly to the router.
#[derive(Clone)]
pub struct InferenceController {
    /// Backend that runs the model
    pub backend: Arc<dyn InferenceBackend>,
    /// Content type used when the client sends none
    pub default_content_type: String,
    /// Accept type used when the client sends none
    pub default_accept: String,
}

impl InferenceController {
    /// Create a controller with JSON defaults.
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            backend,
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
            default_accept: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    /// Create a controller using the header defaults from configuration.
    pub fn with_settings(backend: Arc<dyn InferenceBackend>, settings: &BackendSettings) -> Self {
        Self {
            backend,
            default_content_type: settings.content_type.clone(),
            default_accept: settings.accept.clone(),
        }
    }

    /// Build the backend request from the incoming headers and raw body.
    ///
    /// The body is passed through untouched.
    pub fn inference_request(&self, headers: &HeaderMap, body: Bytes) -> InferenceRequest {
        let content_type = header_str(headers, header::CONTENT_TYPE)
            .unwrap_or(self.default_content_type.as_str())
            .to_string();
        let accept = header_str(headers, header::ACCEPT)
            .filter(|v| *v != "*/*")
            .unwrap_or(self.default_accept.as_str())
            .to_string();

        InferenceRequest {
            body,
            content_type,
            accept,
        }
    }
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::LocalBackend;
    use axum::http::HeaderValue;

    fn controller() -> InferenceController {
        InferenceController::new(Arc::new(LocalBackend::new()))
    }

    #[test]
    fn test_missing_headers_use_defaults() {
        let request = controller().inference_request(&HeaderMap::new(), Bytes::from_static(b"{}"));
        assert_eq!(request.content_type, "application/json");
        assert_eq!(request.accept, "application/json");
        assert_eq!(request.body.as_ref(), b"{}");
    }

    #[test]
    fn test_client_headers_are_forwarded() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/jsonlines"));

        let request = controller().inference_request(&headers, Bytes::from_static(b"1,2,3"));
        assert_eq!(request.content_type, "text/csv");
        assert_eq!(request.accept, "application/jsonlines");
    }

    #[test]
    fn test_wildcard_accept_falls_back_to_default() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("*/*"));

        let settings = BackendSettings {
            accept: "text/csv".to_string(),
            ..Default::default()
        };
        let controller = InferenceController::with_settings(Arc::new(LocalBackend::new()), &settings);
        let request = controller.inference_request(&headers, Bytes::new());
        assert_eq!(request.accept, "text/csv");
    }
}
