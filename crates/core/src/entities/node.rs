use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::TimeSeries;

/// Marker key flagging an entry whose yearly figures are sums of children
pub const AGGREGATED_KEY: &str = "_aggregated";
/// Marker key carrying the entry's depth in the dashboard's level convention
pub const LEVEL_KEY: &str = "_level";

/// Depth of a first-split segment (level 1 is the grand total, level 3 a
/// sub-split) in the dashboard's three-level convention
pub const FIRST_SEGMENT_LEVEL: u8 = 2;

/// Parent entry of a hierarchical taxonomy.
///
/// Holds the child series and the parent's own per-year totals as separate
/// fields; the dashboard wire format flattens them into one object where
/// child names, year keys, and the `_aggregated`/`_level` markers sit side
/// by side. The flattening happens only here, at the serialization boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedNode {
    children: IndexMap<String, TimeSeries>,
    totals: TimeSeries,
    level: u8,
}

impl AggregatedNode {
    pub fn new(children: IndexMap<String, TimeSeries>, totals: TimeSeries, level: u8) -> Self {
        Self {
            children,
            totals,
            level,
        }
    }

    pub fn children(&self) -> &IndexMap<String, TimeSeries> {
        &self.children
    }

    pub fn totals(&self) -> &TimeSeries {
        &self.totals
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Serialize for AggregatedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // children, then yearly totals, then markers - fixed on-wire order
        let entries = self.children.len() + self.totals.len() + 2;
        let mut map = serializer.serialize_map(Some(entries))?;
        for (name, series) in &self.children {
            map.serialize_entry(name, series)?;
        }
        for (year, point) in self.totals.iter() {
            map.serialize_entry(year, &point)?;
        }
        map.serialize_entry(AGGREGATED_KEY, &true)?;
        map.serialize_entry(LEVEL_KEY, &self.level)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::DataPoint;

    fn sample_node() -> AggregatedNode {
        let mut child = TimeSeries::new();
        child.insert(2021, DataPoint::Decimal(10.5));

        let mut children = IndexMap::new();
        children.insert("Reels".to_string(), child);

        let mut totals = TimeSeries::new();
        totals.insert(2021, DataPoint::Decimal(10.5));

        AggregatedNode::new(children, totals, FIRST_SEGMENT_LEVEL)
    }

    #[test]
    fn test_flattened_wire_shape() {
        let json = serde_json::to_value(sample_node()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["Reels"]["2021"], 10.5);
        assert_eq!(obj["2021"], 10.5);
        assert_eq!(obj[AGGREGATED_KEY], true);
        assert_eq!(obj[LEVEL_KEY], 2);
    }

    #[test]
    fn test_key_order_children_then_totals_then_markers() {
        let json = serde_json::to_string(&sample_node()).unwrap();
        assert_eq!(
            json,
            r#"{"Reels":{"2021":10.5},"2021":10.5,"_aggregated":true,"_level":2}"#
        );
    }
}
