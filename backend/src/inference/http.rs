//! Remote inference backend reached over HTTP.
//!
//! Forwards the payload to a single configured endpoint (a hosted model
//! endpoint or a gateway in front of one) and hands its answer back.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

use super::backend::{InferenceBackend, InferenceOutput, InferenceRequest, DEFAULT_CONTENT_TYPE};
use super::error::{BackendError, BackendResult};
use crate::config::BackendSettings;

/// Upper bound for a reachability check, independent of the inference timeout.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for a remote inference endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    endpoint_url: Url,
    timeout: Duration,
    health_timeout: Duration,
}

impl HttpBackend {
    /// Create a backend for `endpoint_url` with a per-request timeout.
    ///
    /// # Errors
    /// Returns [`BackendError::Configuration`] if the URL is not an absolute
    /// http(s) URL or the client cannot be built.
    pub fn new(endpoint_url: &str, timeout: Duration) -> BackendResult<Self> {
        let endpoint_url = Url::parse(endpoint_url).map_err(|e| {
            BackendError::configuration(format!("Invalid endpoint URL '{}': {}", endpoint_url, e))
        })?;
        if !matches!(endpoint_url.scheme(), "http" | "https") {
            return Err(BackendError::configuration(format!(
                "Unsupported endpoint URL scheme '{}'",
                endpoint_url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint_url,
            timeout,
            health_timeout: timeout.min(HEALTH_CHECK_TIMEOUT),
        })
    }

    /// Create a backend from the `[backend]` configuration section.
    pub fn from_settings(settings: &BackendSettings) -> BackendResult<Self> {
        let url = settings.endpoint_url.as_deref().ok_or_else(|| {
            BackendError::configuration("HTTP backend requires an endpoint URL")
        })?;
        Self::new(url, Duration::from_secs(settings.timeout_secs))
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Override how long [`InferenceBackend::health_check`] waits.
    pub fn with_health_timeout(mut self, health_timeout: Duration) -> Self {
        self.health_timeout = health_timeout.min(self.timeout);
        self
    }

    pub fn health_timeout(&self) -> Duration {
        self.health_timeout
    }

    fn map_send_error(&self, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout(self.timeout)
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl InferenceBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn invoke(&self, request: InferenceRequest) -> BackendResult<InferenceOutput> {
        debug!(
            endpoint = %self.endpoint_url,
            bytes = request.body.len(),
            content_type = %request.content_type,
            "forwarding inference request"
        );

        let response = self
            .client
            .post(self.endpoint_url.clone())
            .header(CONTENT_TYPE, request.content_type.as_str())
            .header(ACCEPT, request.accept.as_str())
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        let body = response.bytes().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint = %self.endpoint_url, "inference endpoint returned an error");
            return Err(BackendError::upstream(
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok(InferenceOutput::new(body, content_type))
    }

    /// Any HTTP answer counts as reachable, whatever its status.
    async fn health_check(&self) -> BackendResult<bool> {
        let probe = self
            .client
            .get(self.endpoint_url.clone())
            .timeout(self.health_timeout)
            .send()
            .await;
        match probe {
            Ok(_) => Ok(true),
            Err(e) if e.is_connect() || e.is_timeout() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_relative_url() {
        let err = HttpBackend::new("/invocations", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, BackendError::Configuration(_)));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = HttpBackend::new("ftp://models.local/invocations", Duration::from_secs(1)).unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_health_timeout_is_capped() {
        let backend = HttpBackend::new("http://127.0.0.1:9000/invocations", Duration::from_secs(60)).unwrap();
        assert_eq!(backend.health_timeout(), HEALTH_CHECK_TIMEOUT);

        let backend = backend.with_health_timeout(Duration::from_secs(600));
        assert_eq!(backend.health_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_from_settings_requires_url() {
        let settings = BackendSettings {
            endpoint_url: None,
            ..Default::default()
        };
        assert!(HttpBackend::from_settings(&settings).is_err());
    }

    #[test]
    fn test_from_settings_uses_timeout() {
        let settings = BackendSettings {
            endpoint_url: Some("https://runtime.example.com/endpoints/demo/invocations".to_string()),
            timeout_secs: 5,
            ..Default::default()
        };
        let backend = HttpBackend::from_settings(&settings).unwrap();
        assert_eq!(backend.timeout(), Duration::from_secs(5));
        assert_eq!(backend.health_timeout(), Duration::from_secs(5));
        assert_eq!(backend.endpoint_url().host_str(), Some("runtime.example.com"));
    }
}
