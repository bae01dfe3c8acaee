//! Coiled Tubing Market Core Domain
//!
//! Pure domain types for the market dataset: measures, year ranges, time
//! series, and the nested taxonomy structures serialized to the dashboard.
//! This crate contains no I/O, no randomness, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    AGGREGATED_KEY, AggregatedNode, FIRST_SEGMENT_LEVEL, GeographyDataset, LEVEL_KEY,
    MarketDataset, TaxonomyData, TimeSeries,
};
pub use values::{DataPoint, Measure, YearRange};
