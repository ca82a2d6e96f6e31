//! Backend factory for dependency injection.
//!
//! Builds the configured [`InferenceBackend`] once at startup; the HTTP
//! layer only ever sees the trait object.

use std::str::FromStr;
use std::sync::Arc;

use super::backend::InferenceBackend;
use super::error::{BackendError, BackendResult};
#[cfg(feature = "http-backend")]
use super::http::HttpBackend;
#[cfg(feature = "local-backend")]
use super::local::LocalBackend;
use crate::config::BackendSettings;

/// Backend type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Remote endpoint over HTTP
    Http,
    /// In-process echo backend
    Local,
}

impl FromStr for BackendType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "http" | "remote" => Ok(Self::Http),
            "local" | "echo" => Ok(Self::Local),
            _ => Err(format!("Unknown backend type: {}", s)),
        }
    }
}

impl BackendType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Local => "local",
        }
    }
}

/// Factory for creating backend instances.
pub struct BackendFactory;

impl BackendFactory {
    /// Create a backend instance based on type.
    ///
    /// # Errors
    /// Fails if the settings are incomplete for the requested type or the
    /// type's cargo feature is disabled.
    pub fn create(
        backend_type: BackendType,
        settings: &BackendSettings,
    ) -> BackendResult<Arc<dyn InferenceBackend>> {
        match backend_type {
            BackendType::Http => {
                #[cfg(feature = "http-backend")]
                {
                    let backend = HttpBackend::from_settings(settings)?;
                    Ok(Arc::new(backend) as Arc<dyn InferenceBackend>)
                }
                #[cfg(not(feature = "http-backend"))]
                {
                    let _ = settings;
                    Err(BackendError::configuration("HTTP backend feature not enabled"))
                }
            }
            BackendType::Local => {
                #[cfg(feature = "local-backend")]
                {
                    Ok(Arc::new(LocalBackend::new()) as Arc<dyn InferenceBackend>)
                }
                #[cfg(not(feature = "local-backend"))]
                {
                    Err(BackendError::configuration("Local backend feature not enabled"))
                }
            }
        }
    }

    /// Create the backend described by the settings alone.
    pub fn from_settings(settings: &BackendSettings) -> BackendResult<Arc<dyn InferenceBackend>> {
        let backend_type = settings
            .backend_type()
            .map_err(|e| BackendError::configuration(e.to_string()))?;
        Self::create(backend_type, settings)
    }
}
