//! Inference backends.
//!
//! ```text
//! handler ──► Arc<dyn InferenceBackend>
//!                 ├── HttpBackend   (remote endpoint, reqwest)
//!                 └── LocalBackend  (in-process echo)
//! ```

pub mod backend;
pub mod error;
pub mod factory;

#[cfg(feature = "http-backend")]
pub mod http;

#[cfg(feature = "local-backend")]
pub mod local;

pub use backend::{InferenceBackend, InferenceOutput, InferenceRequest};
pub use error::{BackendError, BackendResult};
pub use factory::{BackendFactory, BackendType};

#[cfg(feature = "http-backend")]
pub use http::HttpBackend;

#[cfg(feature = "local-backend")]
pub use local::LocalBackend;
