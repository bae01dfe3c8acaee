use serde::{Deserialize, Serialize};

/// Inclusive span of calendar years covered by every generated series.
///
/// Years serialize as string keys ("2021", "2022", ...) and iterate in
/// ascending order, which is also their insertion order on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Number of years in the range; 0 for a reversed range
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Iterate years ascending
    pub fn iter(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }

    /// Iterate year labels ascending ("2021", "2022", ...)
    pub fn labels(&self) -> impl Iterator<Item = String> + use<> {
        (self.start..=self.end).map(|y| y.to_string())
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: 2021,
            end: 2033,
        }
    }
}
