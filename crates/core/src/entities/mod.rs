mod dataset;
mod node;
mod series;

pub use dataset::{GeographyDataset, MarketDataset, TaxonomyData};
pub use node::{AGGREGATED_KEY, AggregatedNode, FIRST_SEGMENT_LEVEL, LEVEL_KEY};
pub use series::TimeSeries;
