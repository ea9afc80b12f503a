//! Error types for Autoquote
//!
//! Provides a unified error type and the pricing error variants

use thiserror::Error;

/// Result type alias using AutoquoteError
pub type Result<T> = std::result::Result<T, AutoquoteError>;

/// Unified error type for Autoquote operations
#[derive(Debug, Error)]
pub enum AutoquoteError {
    // Pricing errors
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Premium calculation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A formula step left the representable decimal range
    #[error("Pricing calculation overflow at step: {step}")]
    Overflow { step: &'static str },
}

impl PricingError {
    pub fn overflow(step: &'static str) -> Self {
        PricingError::Overflow { step }
    }
}

impl From<serde_json::Error> for AutoquoteError {
    fn from(err: serde_json::Error) -> Self {
        AutoquoteError::Serialization(err.to_string())
    }
}
