use serde::Serialize;

/// A single rounded observation in a time series.
///
/// Serialized untagged: value data appears as a JSON number with its one
/// decimal (`892.2`), volume data as a plain integer (`45000`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DataPoint {
    Count(i64),
    Decimal(f64),
}

impl DataPoint {
    /// Numeric magnitude, for aggregation across points
    pub fn as_f64(&self) -> f64 {
        match self {
            DataPoint::Count(n) => *n as f64,
            DataPoint::Decimal(x) => *x,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_serializes_without_fraction() {
        let json = serde_json::to_string(&DataPoint::Count(45000)).unwrap();
        assert_eq!(json, "45000");
    }

    #[test]
    fn test_decimal_serializes_with_fraction() {
        let json = serde_json::to_string(&DataPoint::Decimal(892.2)).unwrap();
        assert_eq!(json, "892.2");

        // Whole-number values keep their trailing .0 as f64
        let json = serde_json::to_string(&DataPoint::Decimal(1088.0)).unwrap();
        assert_eq!(json, "1088.0");
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(DataPoint::Count(7).as_f64(), 7.0);
        assert_eq!(DataPoint::Decimal(1.5).as_f64(), 1.5);
    }
}
