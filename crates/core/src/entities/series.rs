use indexmap::IndexMap;
use serde::Serialize;

use crate::values::DataPoint;

/// Yearly observations for one segment or geography.
///
/// Keys are year labels inserted in ascending order; a complete series has
/// exactly one entry per year of the configured range. Serializes as a flat
/// JSON object (`{"2021": 892.2, ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct TimeSeries {
    points: IndexMap<String, DataPoint>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self {
            points: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: IndexMap::with_capacity(capacity),
        }
    }

    /// Append an observation. Years are expected in ascending order; a
    /// repeated year overwrites in place without changing key order.
    pub fn insert(&mut self, year: u16, point: DataPoint) {
        self.points.insert(year.to_string(), point);
    }

    pub fn get(&self, year: u16) -> Option<DataPoint> {
        self.points.get(year.to_string().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Year labels in insertion order
    pub fn years(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(|k| k.as_str())
    }

    /// (year label, point) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, DataPoint)> {
        self.points.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(u16, DataPoint)> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = (u16, DataPoint)>>(iter: T) -> Self {
        let mut series = TimeSeries::new();
        for (year, point) in iter {
            series.insert(year, point);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut series = TimeSeries::new();
        for year in 2021..=2025 {
            series.insert(year, DataPoint::Decimal(year as f64));
        }

        let years: Vec<&str> = series.years().collect();
        assert_eq!(years, vec!["2021", "2022", "2023", "2024", "2025"]);
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut series = TimeSeries::new();
        series.insert(2021, DataPoint::Decimal(1.5));
        series.insert(2022, DataPoint::Count(3));

        let json = serde_json::to_string(&series).unwrap();
        assert_eq!(json, r#"{"2021":1.5,"2022":3}"#);
    }

    #[test]
    fn test_get_by_year() {
        let mut series = TimeSeries::new();
        series.insert(2021, DataPoint::Count(10));

        assert_eq!(series.get(2021), Some(DataPoint::Count(10)));
        assert_eq!(series.get(2022), None);
    }
}
