//! # Autoquote API
//!
//! HTTP front end for the premium calculator.
//!
//! ```text
//! POST /calculate-premium   VehiclePolicyRequest -> QuoteResult
//! GET  /health
//! GET  /api/v1/version
//! GET  /api/v1/config
//! ```
//!
//! Request bodies are validated by the JSON extractor before they reach the
//! calculator; shape and type failures come back as 4xx with a JSON error body.

pub mod config;
pub mod http;

pub use config::ServiceConfig;
pub use http::{create_router, ApiError, AppState};

/// Service name reported by the version endpoint
pub const SERVICE_NAME: &str = "autoquote-api";

pub const SERVICE_DESCRIPTION: &str = "Vehicle insurance premium quotes";
