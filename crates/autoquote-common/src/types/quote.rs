//! Quote result - the output side of a premium quote

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Premium quote returned to the caller.
///
/// Amounts go over the wire as JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    /// Annual rate fraction (age + value band + GIS adjustment)
    #[serde(with = "rust_decimal::serde::float")]
    pub applied_rate: Decimal,

    /// Maximum payout after the deductible reduction
    #[serde(with = "rust_decimal::serde::float")]
    pub policy_limit: Decimal,

    /// Final amount owed, broker fee included
    #[serde(with = "rust_decimal::serde::float")]
    pub calculated_premium: Decimal,

    /// Deductible in currency units, taken against the policy limit
    #[serde(with = "rust_decimal::serde::float")]
    pub deductible_value: Decimal,
}
