//! Vehicle policy request - the input side of a premium quote

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Vehicle and policy attributes submitted for a quote.
///
/// No range checks are applied: a negative value, a model year far in the
/// future or a deductible above 1.0 are all priced as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePolicyRequest {
    /// Manufacturer (free text)
    pub make: String,

    /// Model name (free text)
    pub model: String,

    /// Model year
    #[serde(deserialize_with = "model_year::deserialize")]
    pub year: i64,

    /// Insured value in currency units
    pub value: Decimal,

    /// Fraction of the base amount absorbed by the insured, nominally 0.0 - 1.0
    pub deductible_percentage: Decimal,

    /// Flat broker fee added to the premium
    pub broker_fee: Decimal,

    /// Registration location, not used by the formula
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_location: Option<String>,
}

impl VehiclePolicyRequest {
    /// Create a request with zero deductible and zero broker fee
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i64,
        value: Decimal,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            value,
            deductible_percentage: Decimal::ZERO,
            broker_fee: Decimal::ZERO,
            registration_location: None,
        }
    }

    /// Set deductible percentage
    pub fn with_deductible(mut self, deductible_percentage: Decimal) -> Self {
        self.deductible_percentage = deductible_percentage;
        self
    }

    /// Set broker fee
    pub fn with_broker_fee(mut self, broker_fee: Decimal) -> Self {
        self.broker_fee = broker_fee;
        self
    }

    /// Set registration location
    pub fn with_registration_location(mut self, location: impl Into<String>) -> Self {
        self.registration_location = Some(location.into());
        self
    }
}

/// Lax model year parsing: integers, whole-number floats (`2014.0`) and
/// integer strings (`"2014"`). Fractional years are rejected.
mod model_year {
    use std::fmt;

    use serde::de::{self, Deserializer, Unexpected, Visitor};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ModelYearVisitor)
    }

    struct ModelYearVisitor;

    impl<'de> Visitor<'de> for ModelYearVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer model year")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // 2^63 is exactly representable, so the upper bound is exclusive
            let in_range = v >= i64::MIN as f64 && v < i64::MAX as f64;
            if v.is_finite() && v.fract() == 0.0 && in_range {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }
}
