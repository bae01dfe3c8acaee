use serde::{Deserialize, Serialize};

use super::DataPoint;

/// What a dataset measures, which fixes its rounding rule and noise level.
///
/// Value data (USD millions) is rounded to one decimal; volume data (unit
/// counts) is rounded to the nearest integer and serialized without a
/// fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Measure {
    Value,
    Volume,
}

impl Measure {
    /// Default multiplicative noise amplitude for series of this measure
    pub fn noise_amplitude(&self) -> f64 {
        match self {
            Measure::Value => 0.03,
            Measure::Volume => 0.04,
        }
    }

    /// Round a raw magnitude into a serializable data point
    pub fn round(&self, raw: f64) -> DataPoint {
        match self {
            Measure::Value => DataPoint::Decimal((raw * 10.0).round() / 10.0),
            Measure::Volume => DataPoint::Count(raw.round() as i64),
        }
    }
}
