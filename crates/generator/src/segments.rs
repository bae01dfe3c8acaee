//! Segment taxonomy generation
//!
//! Flat taxonomies: one independently perturbed series per segment share.
//! The hierarchical offering taxonomy: child series per parent category,
//! with parent totals derived by summing the already-rounded children.

use indexmap::IndexMap;
use rand::Rng;

use ctmarket_core::{AggregatedNode, FIRST_SEGMENT_LEVEL, Measure, TimeSeries, YearRange};

use crate::config::OfferingConfig;
use crate::series::generate_series;

/// Generate a flat taxonomy: segment base = total base x share, segment
/// CAGR = base CAGR plus one uniform draw in `[-perturbation, +perturbation]`
pub fn generate_flat_segments<R: Rng>(
    rng: &mut R,
    total_base: f64,
    segments: &IndexMap<String, f64>,
    cagr: f64,
    years: YearRange,
    measure: Measure,
    noise_amplitude: f64,
    perturbation: f64,
) -> IndexMap<String, TimeSeries> {
    let mut result = IndexMap::with_capacity(segments.len());
    for (name, share) in segments {
        let segment_base = total_base * share;
        let segment_cagr = cagr + rng.gen_range(-perturbation..=perturbation);
        let series = generate_series(rng, segment_base, segment_cagr, years, measure, noise_amplitude);
        result.insert(name.clone(), series);
    }
    result
}

/// Generate the hierarchical offering taxonomy.
///
/// Children are generated first; each parent's yearly total is the
/// measure-rounded sum of its children's rounded values for that year, so
/// totals stay consistent with what the document actually shows.
pub fn generate_offering<R: Rng>(
    rng: &mut R,
    total_base: f64,
    offering: &OfferingConfig,
    cagr: f64,
    years: YearRange,
    measure: Measure,
    noise_amplitude: f64,
    perturbation: f64,
) -> IndexMap<String, AggregatedNode> {
    let mut result = IndexMap::with_capacity(offering.parents.len());
    for parent in &offering.parents {
        let parent_base = total_base * parent.share;

        let mut children = IndexMap::with_capacity(parent.children.len());
        for (child_name, child_share) in &parent.children {
            let child_base = parent_base * child_share;
            let child_cagr = cagr + rng.gen_range(-perturbation..=perturbation);
            let series =
                generate_series(rng, child_base, child_cagr, years, measure, noise_amplitude);
            children.insert(child_name.clone(), series);
        }

        let mut totals = TimeSeries::with_capacity(years.len());
        for year in years.iter() {
            let sum: f64 = children
                .values()
                .filter_map(|series| series.get(year))
                .map(|point| point.as_f64())
                .sum();
            totals.insert(year, measure.round(sum));
        }

        result.insert(
            parent.name.clone(),
            AggregatedNode::new(children, totals, FIRST_SEGMENT_LEVEL),
        );
    }
    result
}
