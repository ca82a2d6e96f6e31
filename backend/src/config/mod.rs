//! Gateway configuration.
//!
//! Settings come from a `gateway.toml` file when one is found, otherwise
//! from environment variables. Every field has a default, so an empty file
//! or an empty environment yields a runnable local setup.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::inference::backend::DEFAULT_CONTENT_TYPE;
use crate::inference::BackendType;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Full gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub backend: BackendSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Largest accepted request body
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

/// Inference backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// `http` or `local`; resolved from the endpoint URL when absent
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Content type assumed when a client sends none
    #[serde(default = "default_content_type")]
    pub content_type: String,
    /// Accept type assumed when a client sends none
    #[serde(default = "default_content_type")]
    pub accept: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

// Payload cap of hosted real-time inference endpoints.
fn default_body_limit_bytes() -> usize {
    6 * 1024 * 1024
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            kind: None,
            endpoint_url: None,
            timeout_secs: default_timeout_secs(),
            content_type: default_content_type(),
            accept: default_content_type(),
        }
    }
}

impl BackendSettings {
    /// Resolve which backend to build.
    ///
    /// An explicit type wins; otherwise a configured endpoint URL selects the
    /// HTTP backend and its absence selects the local one.
    pub fn backend_type(&self) -> ConfigResult<BackendType> {
        match self.kind.as_deref() {
            Some(kind) => {
                BackendType::from_str(kind).map_err(|e| ConfigError::invalid("backend.type", e))
            }
            None if self.endpoint_url.is_some() => Ok(BackendType::Http),
            None => Ok(BackendType::Local),
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: GatewayConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Search for `gateway.toml` in the usual locations.
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> ConfigResult<Option<Self>> {
        let search_paths = [
            PathBuf::from("gateway.toml"),
            PathBuf::from("backend/gateway.toml"),
            PathBuf::from("../gateway.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (default: 0.0.0.0)
    /// - `PORT` (default: 8080)
    /// - `BODY_LIMIT_BYTES` (default: 6 MiB)
    /// - `INFERENCE_BACKEND`: `http` | `local`
    /// - `INFERENCE_ENDPOINT_URL`: remote endpoint for the HTTP backend
    /// - `INFERENCE_TIMEOUT_SECS` (default: 60)
    /// - `INFERENCE_CONTENT_TYPE` (default: application/json)
    /// - `INFERENCE_ACCEPT` (default: application/json)
    pub fn from_env() -> ConfigResult<Self> {
        let defaults = ServerSettings::default();
        let server = ServerSettings {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_env("PORT")?.unwrap_or(defaults.port),
            body_limit_bytes: parse_env("BODY_LIMIT_BYTES")?.unwrap_or(defaults.body_limit_bytes),
        };

        let defaults = BackendSettings::default();
        let backend = BackendSettings {
            kind: non_empty_env("INFERENCE_BACKEND"),
            endpoint_url: non_empty_env("INFERENCE_ENDPOINT_URL"),
            timeout_secs: parse_env("INFERENCE_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs),
            content_type: non_empty_env("INFERENCE_CONTENT_TYPE").unwrap_or(defaults.content_type),
            accept: non_empty_env("INFERENCE_ACCEPT").unwrap_or(defaults.accept),
        };

        let config = Self { server, backend };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration the way the server binary does.
    ///
    /// `GATEWAY_CONFIG` names an explicit file; otherwise the default file
    /// locations are searched, falling back to environment variables.
    pub fn load() -> ConfigResult<Self> {
        if let Some(path) = non_empty_env("GATEWAY_CONFIG") {
            return Self::from_file(path);
        }
        match Self::from_default_location()? {
            Some(config) => Ok(config),
            None => Self::from_env(),
        }
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::invalid("server.body_limit_bytes", "must be greater than zero"));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::invalid("backend.timeout_secs", "must be greater than zero"));
        }
        if self.backend.backend_type()? == BackendType::Http && self.backend.endpoint_url.is_none() {
            return Err(ConfigError::invalid(
                "backend.endpoint_url",
                "required when backend type is http",
            ));
        }
        check_header_value("backend.content_type", &self.backend.content_type)?;
        check_header_value("backend.accept", &self.backend.accept)?;
        Ok(())
    }

    /// Address string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

// Defaults end up as request and response headers, so they must be valid header values.
#[cfg(feature = "http-server")]
fn check_header_value(key: &str, value: &str) -> ConfigResult<()> {
    axum::http::HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|e| ConfigError::invalid(key, format!("not a valid header value: {}", e)))
}

#[cfg(all(not(feature = "http-server"), feature = "http-backend"))]
fn check_header_value(key: &str, value: &str) -> ConfigResult<()> {
    reqwest::header::HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|e| ConfigError::invalid(key, format!("not a valid header value: {}", e)))
}

#[cfg(not(any(feature = "http-server", feature = "http-backend")))]
fn check_header_value(_key: &str, _value: &str) -> ConfigResult<()> {
    Ok(())
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: FromStr>(key: &str) -> ConfigResult<Option<T>> {
    match non_empty_env(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::invalid(key, format!("cannot parse '{}'", raw))),
        None => Ok(None),
    }
}
