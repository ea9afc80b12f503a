//! Pricing configuration

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Process-wide pricing constants.
///
/// Built once at startup and handed to [`crate::PremiumCalculator`]; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Share of the vehicle value that is insurable (1.0 = 100%)
    #[serde(with = "rust_decimal::serde::float")]
    pub coverage_percentage: Decimal,
    /// Flat additive rate adjustment applied to every quote
    #[serde(with = "rust_decimal::serde::float")]
    pub gis_adjustment: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            coverage_percentage: crate::DEFAULT_COVERAGE_PERCENTAGE,
            gis_adjustment: crate::DEFAULT_GIS_ADJUSTMENT,
        }
    }
}

impl PricingConfig {
    pub fn new(coverage_percentage: Decimal, gis_adjustment: Decimal) -> Self {
        Self {
            coverage_percentage,
            gis_adjustment,
        }
    }

    /// Set coverage percentage
    pub fn with_coverage_percentage(mut self, coverage_percentage: Decimal) -> Self {
        self.coverage_percentage = coverage_percentage;
        self
    }

    /// Set GIS adjustment
    pub fn with_gis_adjustment(mut self, gis_adjustment: Decimal) -> Self {
        self.gis_adjustment = gis_adjustment;
        self
    }
}
