//! # Autoquote Common
//!
//! Shared types and errors for the Autoquote vehicle premium service.
//!
//! ## Core Types
//!
//! - [`VehiclePolicyRequest`]: vehicle and policy attributes submitted for a quote
//! - [`QuoteResult`]: rate, premium, policy limit and deductible returned to the caller
//!
//! ## Errors
//!
//! - [`AutoquoteError`]: unified error for every crate in the workspace
//! - [`PricingError`]: failures raised while evaluating the premium formula

pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AutoquoteError, PricingError, Result};
pub use types::{quote::QuoteResult, vehicle::VehiclePolicyRequest};

/// Autoquote version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
