use indexmap::IndexMap;
use serde::Serialize;

use super::{AggregatedNode, TimeSeries};

/// One taxonomy's worth of series inside a geography.
///
/// Flat taxonomies (and "By Country" breakdowns) map segment name directly
/// to a series; hierarchical taxonomies map parent name to an aggregated
/// node carrying children and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaxonomyData {
    Flat(IndexMap<String, TimeSeries>),
    Hierarchical(IndexMap<String, AggregatedNode>),
}

impl TaxonomyData {
    /// Number of segments (or parent categories) in this taxonomy
    pub fn segment_count(&self) -> usize {
        match self {
            TaxonomyData::Flat(segments) => segments.len(),
            TaxonomyData::Hierarchical(parents) => parents.len(),
        }
    }
}

/// All taxonomies generated for one region or country, keyed by taxonomy
/// name ("By Offering", "By Material Type", ..., "By Country" for regions)
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct GeographyDataset {
    taxonomies: IndexMap<String, TaxonomyData>,
}

impl GeographyDataset {
    pub fn new() -> Self {
        Self {
            taxonomies: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, data: TaxonomyData) {
        self.taxonomies.insert(name.into(), data);
    }

    pub fn get(&self, name: &str) -> Option<&TaxonomyData> {
        self.taxonomies.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.taxonomies.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TaxonomyData)> {
        self.taxonomies.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Root of one output document: every region and every country as a
/// top-level entry, countries following their region
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(transparent)]
pub struct MarketDataset {
    geographies: IndexMap<String, GeographyDataset>,
}

impl MarketDataset {
    pub fn new() -> Self {
        Self {
            geographies: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, geography: impl Into<String>, dataset: GeographyDataset) {
        self.geographies.insert(geography.into(), dataset);
    }

    pub fn get(&self, geography: &str) -> Option<&GeographyDataset> {
        self.geographies.get(geography)
    }

    pub fn get_mut(&mut self, geography: &str) -> Option<&mut GeographyDataset> {
        self.geographies.get_mut(geography)
    }

    pub fn len(&self) -> usize {
        self.geographies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geographies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GeographyDataset)> {
        self.geographies.iter().map(|(k, v)| (k.as_str(), v))
    }
}
