#![allow(dead_code)]

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use inference_gateway::inference::{
    BackendError, BackendResult, InferenceBackend, InferenceOutput, InferenceRequest,
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Every variable the gateway reads, cleared.
pub const CLEAN_GATEWAY_ENV: &[(&str, Option<&str>)] = &[
    ("GATEWAY_CONFIG", None),
    ("HOST", None),
    ("PORT", None),
    ("BODY_LIMIT_BYTES", None),
    ("INFERENCE_BACKEND", None),
    ("INFERENCE_ENDPOINT_URL", None),
    ("INFERENCE_TIMEOUT_SECS", None),
    ("INFERENCE_CONTENT_TYPE", None),
    ("INFERENCE_ACCEPT", None),
];

/// Backend that records every request it receives.
///
/// Echoes the request back unless built with [`RecordingBackend::failing`].
pub struct RecordingBackend {
    calls: parking_lot::Mutex<Vec<InferenceRequest>>,
    failure: Option<fn() -> BackendError>,
}

impl RecordingBackend {
    pub fn echo() -> Self {
        Self {
            calls: parking_lot::Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(failure: fn() -> BackendError) -> Self {
        Self {
            calls: parking_lot::Mutex::new(Vec::new()),
            failure: Some(failure),
        }
    }

    pub fn calls(&self) -> Vec<InferenceRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl InferenceBackend for RecordingBackend {
    fn name(&self) -> &str {
        "recording"
    }

    async fn invoke(&self, request: InferenceRequest) -> BackendResult<InferenceOutput> {
        self.calls.lock().push(request.clone());
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(InferenceOutput::new(request.body, request.content_type)),
        }
    }

    async fn health_check(&self) -> BackendResult<bool> {
        Ok(true)
    }
}

/// Serve `app` on an ephemeral localhost port and return its address.
pub async fn spawn_server(app: axum::Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    addr
}
