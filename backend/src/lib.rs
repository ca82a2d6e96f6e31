//! # Inference Gateway
//!
//! HTTP front door for a hosted machine-learning model.
//!
//! The crate exposes one route, `POST /inference`, which forwards the raw
//! request body to an inference backend and writes the backend's answer
//! back unchanged.
//!
//! ## Architecture
//!
//! - [`http`]: axum router, handler and error mapping
//! - [`inference`]: the [`inference::InferenceBackend`] trait and its
//!   HTTP and local implementations
//! - [`config`]: TOML / environment configuration
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use inference_gateway::http::{inference_router, InferenceController};
//! use inference_gateway::inference::LocalBackend;
//!
//! let router = inference_router(InferenceController::new(Arc::new(LocalBackend::new())));
//! let app = axum::Router::new().nest("/api/v1", router);
//! ```

pub mod config;
pub mod inference;

#[cfg(feature = "http-server")]
pub mod http;
