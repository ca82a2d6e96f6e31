//! HTTP server module.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Hosting app (create_app)                                 │
//! │  - /health, CORS, compression, tracing, body limit        │
//! │  - mounts the inference router under /api/v1              │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Inference router (inference_router)                      │
//! │  - POST /inference → handlers::post_inference             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  InferenceBackend (inference/)                            │
//! │  - HttpBackend / LocalBackend                             │
//! └──────────────────────────────────────────────────────────┘
//! ```

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::{create_app, inference_router, API_PREFIX, INFERENCE_PATH};

#[cfg(feature = "http-server")]
pub use state::InferenceController;
