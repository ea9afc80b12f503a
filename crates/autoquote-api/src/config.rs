//! Autoquote service configuration
//!
//! Read once at startup from the environment (and `.env` when present).

use std::net::SocketAddr;
use std::str::FromStr;

use autoquote_common::{AutoquoteError, Result};
use autoquote_pricing::PricingConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Insurable share of the vehicle value
pub const ENV_COVERAGE_PERCENTAGE: &str = "COVERAGE_PERCENTAGE";
/// Flat additive rate adjustment
pub const ENV_GIS_ADJUSTMENT: &str = "GIS_ADJUSTMENT";
/// Platform-provided port (Railway, Heroku, ...)
pub const ENV_PORT: &str = "PORT";
pub const ENV_SERVICE_PORT: &str = "AUTOQUOTE_PORT";
pub const ENV_SERVICE_HOST: &str = "AUTOQUOTE_HOST";

/// Autoquote service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service host
    pub host: String,
    /// Service port
    pub port: u16,
    /// Pricing constants
    pub pricing: PricingConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            pricing: PricingConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        // Platform PORT first, prefixed variable wins
        if let Some(port) = lookup(ENV_PORT) {
            cfg.port = parse_port(ENV_PORT, &port)?;
        }
        if let Some(port) = lookup(ENV_SERVICE_PORT) {
            cfg.port = parse_port(ENV_SERVICE_PORT, &port)?;
        }
        if let Some(host) = lookup(ENV_SERVICE_HOST) {
            cfg.host = host.trim().to_string();
        }

        if let Some(val) = lookup(ENV_COVERAGE_PERCENTAGE) {
            cfg.pricing.coverage_percentage = parse_decimal(ENV_COVERAGE_PERCENTAGE, &val)?;
        }
        if let Some(val) = lookup(ENV_GIS_ADJUSTMENT) {
            cfg.pricing.gis_adjustment = parse_decimal(ENV_GIS_ADJUSTMENT, &val)?;
        }

        Ok(cfg)
    }

    /// Socket address the HTTP server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                AutoquoteError::Config(format!(
                    "invalid bind address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }
}

fn parse_port(key: &str, raw: &str) -> Result<u16> {
    raw.trim()
        .parse()
        .map_err(|_| {
            AutoquoteError::Config(format!("{} must be a port number, got {:?}", key, raw))
        })
}

/// Accepts plain (`0.85`) and scientific (`1e-3`) notation
fn parse_decimal(key: &str, raw: &str) -> Result<Decimal> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| AutoquoteError::Config(format!("{} must be a number, got {:?}", key, raw)))
}
