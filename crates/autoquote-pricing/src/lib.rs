//! # Autoquote Pricing
//!
//! Vehicle premium calculation.
//!
//! ## Pricing Formula
//!
//! ```text
//! rate    = (2024 - year) × 0.005 + ⌊value / 10000⌋ × 0.005 + gis
//! premium = value × rate × (1 - deductible) + broker_fee
//! limit   = value × coverage × (1 - deductible)
//! ```
//!
//! The returned deductible is the policy-limit one (`value × coverage × deductible`),
//! not the amount subtracted from the premium.

pub mod calculator;
pub mod config;

pub use calculator::{
    age_based_rate, compute, value_bands, value_based_rate, PremiumBreakdown, PremiumCalculator,
};
pub use config::PricingConfig;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Model year the vehicle age is measured against.
///
/// Fixed, so quotes drift by one year's rate every January until this moves.
pub const REFERENCE_YEAR: i64 = 2024;

/// Rate added per year of vehicle age (0.5%)
pub const RATE_PER_YEAR: Decimal = dec!(0.005);

/// Rate added per full value band (0.5%)
pub const RATE_PER_VALUE_BAND: Decimal = dec!(0.005);

/// Width of one value band in currency units
pub const VALUE_BAND_WIDTH: Decimal = dec!(10000);

/// Default insurable share of the vehicle value (100%)
pub const DEFAULT_COVERAGE_PERCENTAGE: Decimal = dec!(1.0);

/// Default flat rate adjustment
pub const DEFAULT_GIS_ADJUSTMENT: Decimal = dec!(0.0);
