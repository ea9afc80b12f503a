//! Premium calculator
//!
//! Evaluates the quote formula step by step with checked decimal arithmetic:
//! - Age rate: 0.5% per year before the reference year (negative for future years)
//! - Value rate: 0.5% per full 10,000 band, floor semantics
//! - Premium: value × rate, less the premium deductible, plus broker fee
//! - Policy limit: value × coverage, less the limit deductible

use autoquote_common::{PricingError, QuoteResult, Result, VehiclePolicyRequest};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::{PricingConfig, RATE_PER_VALUE_BAND, RATE_PER_YEAR, REFERENCE_YEAR, VALUE_BAND_WIDTH};

/// Every intermediate value of a quote
#[derive(Debug, Clone, PartialEq)]
pub struct PremiumBreakdown {
    /// Years between the model year and the reference year (signed)
    pub vehicle_age: i64,
    pub age_based_rate: Decimal,
    /// Number of full value bands
    pub value_bands: Decimal,
    pub value_based_rate: Decimal,
    pub gis_adjustment: Decimal,
    pub applied_rate: Decimal,
    pub base_premium: Decimal,
    /// Deductible taken off the premium (value × rate × deductible)
    pub premium_deductible: Decimal,
    pub calculated_premium: Decimal,
    pub base_policy_limit: Decimal,
    /// Deductible taken off the policy limit; this is the one reported in the quote
    pub limit_deductible: Decimal,
    pub policy_limit: Decimal,
}

impl PremiumBreakdown {
    /// Project onto the caller-facing quote
    pub fn into_quote(self) -> QuoteResult {
        QuoteResult {
            applied_rate: self.applied_rate,
            policy_limit: self.policy_limit,
            calculated_premium: self.calculated_premium,
            // TODO: product owner to confirm whether the premium deductible belongs here
            deductible_value: self.limit_deductible,
        }
    }
}

/// Stateless premium calculator bound to one pricing configuration
#[derive(Debug, Clone, Default)]
pub struct PremiumCalculator {
    config: PricingConfig,
}

impl PremiumCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Calculate a quote for a vehicle
    pub fn compute(&self, request: &VehiclePolicyRequest) -> Result<QuoteResult> {
        Ok(self.breakdown(request)?.into_quote())
    }

    /// Calculate a quote and keep every intermediate step
    #[instrument(skip(self, request), fields(year = request.year, value = %request.value))]
    pub fn breakdown(&self, request: &VehiclePolicyRequest) -> Result<PremiumBreakdown> {
        let vehicle_age = REFERENCE_YEAR
            .checked_sub(request.year)
            .ok_or(PricingError::overflow("vehicle_age"))?;
        let age_based_rate = age_based_rate(request.year)?;
        let value_bands = value_bands(request.value)?;
        let value_based_rate = mul(value_bands, RATE_PER_VALUE_BAND, "value_based_rate")?;

        let applied_rate = add(
            add(age_based_rate, value_based_rate, "applied_rate")?,
            self.config.gis_adjustment,
            "applied_rate",
        )?;

        let base_premium = mul(request.value, applied_rate, "base_premium")?;
        let premium_deductible = mul(
            base_premium,
            request.deductible_percentage,
            "premium_deductible",
        )?;
        let calculated_premium = add(
            sub(base_premium, premium_deductible, "calculated_premium")?,
            request.broker_fee,
            "calculated_premium",
        )?;

        let base_policy_limit = mul(
            request.value,
            self.config.coverage_percentage,
            "base_policy_limit",
        )?;
        let limit_deductible = mul(
            base_policy_limit,
            request.deductible_percentage,
            "limit_deductible",
        )?;
        let policy_limit = sub(base_policy_limit, limit_deductible, "policy_limit")?;

        debug!(
            %age_based_rate,
            %value_based_rate,
            %applied_rate,
            %base_premium,
            %calculated_premium,
            %policy_limit,
            "Calculated premium"
        );

        Ok(PremiumBreakdown {
            vehicle_age,
            age_based_rate,
            value_bands,
            value_based_rate,
            gis_adjustment: self.config.gis_adjustment,
            applied_rate,
            base_premium,
            premium_deductible,
            calculated_premium,
            base_policy_limit,
            limit_deductible,
            policy_limit,
        })
    }
}

/// Quote a vehicle against explicit coverage and GIS values
pub fn compute(
    request: &VehiclePolicyRequest,
    coverage_pct: Decimal,
    gis_adj: Decimal,
) -> Result<QuoteResult> {
    PremiumCalculator::new(PricingConfig::new(coverage_pct, gis_adj)).compute(request)
}

/// Age contribution: (reference year - year) × 0.5%
pub fn age_based_rate(year: i64) -> Result<Decimal> {
    let age = REFERENCE_YEAR
        .checked_sub(year)
        .ok_or(PricingError::overflow("age_based_rate"))?;
    mul(Decimal::from(age), RATE_PER_YEAR, "age_based_rate")
}

/// Full value bands, floored toward negative infinity
pub fn value_bands(value: Decimal) -> Result<Decimal> {
    value
        .checked_div(VALUE_BAND_WIDTH)
        .map(|bands| bands.floor())
        .ok_or_else(|| PricingError::overflow("value_bands").into())
}

/// Value contribution: full value bands × 0.5%
pub fn value_based_rate(value: Decimal) -> Result<Decimal> {
    mul(value_bands(value)?, RATE_PER_VALUE_BAND, "value_based_rate")
}

fn add(a: Decimal, b: Decimal, step: &'static str) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| PricingError::overflow(step).into())
}

fn sub(a: Decimal, b: Decimal, step: &'static str) -> Result<Decimal> {
    a.checked_sub(b).ok_or_else(|| PricingError::overflow(step).into())
}

fn mul(a: Decimal, b: Decimal, step: &'static str) -> Result<Decimal> {
    a.checked_mul(b).ok_or_else(|| PricingError::overflow(step).into())
}
