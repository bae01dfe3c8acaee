//! Geography assembly - one geography's full taxonomy set
//!
//! Builds the hierarchical "By Offering" taxonomy followed by the six flat
//! taxonomies for a single region or country, and the region-only
//! "By Country" breakdown.

use indexmap::IndexMap;
use rand::Rng;

use ctmarket_core::{GeographyDataset, Measure, TaxonomyData, TimeSeries};

use crate::config::{MarketConfig, RegionConfig};
use crate::segments::{generate_flat_segments, generate_offering};
use crate::series::generate_series;

/// Taxonomy name for the per-region country breakdown
pub const BY_COUNTRY: &str = "By Country";

/// Assembles complete geography datasets from the configured taxonomies
pub struct GeographyAssembler<'a> {
    config: &'a MarketConfig,
}

impl<'a> GeographyAssembler<'a> {
    pub fn new(config: &'a MarketConfig) -> Self {
        Self { config }
    }

    /// Build all segment taxonomies for one geography and measure:
    /// "By Offering" first, then the flat taxonomies in config order
    pub fn assemble<R: Rng>(
        &self,
        rng: &mut R,
        measure: Measure,
        base: f64,
        cagr: f64,
    ) -> GeographyDataset {
        let years = self.config.years;
        let noise = self.config.noise.for_measure(measure);
        let perturbation = self.config.perturbation.segment;

        let mut dataset = GeographyDataset::new();

        let offering = generate_offering(
            rng,
            base,
            &self.config.offering,
            cagr,
            years,
            measure,
            noise,
            perturbation,
        );
        dataset.insert(
            self.config.offering.name.clone(),
            TaxonomyData::Hierarchical(offering),
        );

        for taxonomy in &self.config.flat_taxonomies {
            let segments = generate_flat_segments(
                rng,
                base,
                &taxonomy.segments,
                cagr,
                years,
                measure,
                noise,
                perturbation,
            );
            dataset.insert(taxonomy.name.clone(), TaxonomyData::Flat(segments));
        }

        dataset
    }

    /// Build a region's "By Country" breakdown for both measures.
    ///
    /// One CAGR perturbation is drawn per country and shared by that
    /// country's value and volume series, matching the fixed draw order.
    pub fn country_breakdown<R: Rng>(
        &self,
        rng: &mut R,
        region: &RegionConfig,
        value_base: f64,
        volume_base: f64,
    ) -> (IndexMap<String, TimeSeries>, IndexMap<String, TimeSeries>) {
        let years = self.config.years;
        let perturbation = self.config.perturbation.by_country;

        let mut value_series = IndexMap::with_capacity(region.countries.len());
        let mut volume_series = IndexMap::with_capacity(region.countries.len());

        for country in &region.countries {
            let cagr = region.cagr + rng.gen_range(-perturbation..=perturbation);

            let value = generate_series(
                rng,
                value_base * country.share,
                cagr,
                years,
                Measure::Value,
                self.config.noise.value,
            );
            let volume = generate_series(
                rng,
                volume_base * country.share,
                cagr,
                years,
                Measure::Volume,
                self.config.noise.volume,
            );

            value_series.insert(country.name.clone(), value);
            volume_series.insert(country.name.clone(), volume);
        }

        (value_series, volume_series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_assemble_builds_all_taxonomies_in_order() {
        let config = MarketConfig::default();
        let assembler = GeographyAssembler::new(&config);
        let mut rng = StdRng::seed_from_u64(42);

        let dataset = assembler.assemble(&mut rng, Measure::Value, 1088.0, 0.052);

        let names: Vec<&str> = dataset.iter().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![
                "By Offering",
                "By Operational Task",
                "By Material Type",
                "By Tubing Outer Diameter",
                "By Application",
                "By Well Type",
                "By End User",
            ]
        );
    }

    #[test]
    fn test_assemble_segment_counts() {
        let config = MarketConfig::default();
        let assembler = GeographyAssembler::new(&config);
        let mut rng = StdRng::seed_from_u64(42);

        let dataset = assembler.assemble(&mut rng, Measure::Volume, 45000.0, 0.052);

        assert_eq!(dataset.get("By Offering").unwrap().segment_count(), 2);
        assert_eq!(dataset.get("By Material Type").unwrap().segment_count(), 5);
        assert_eq!(dataset.get("By Application").unwrap().segment_count(), 2);
        assert!(!dataset.contains(BY_COUNTRY));
    }

    #[test]
    fn test_country_breakdown_covers_region_countries() {
        let config = MarketConfig::default();
        let assembler = GeographyAssembler::new(&config);
        let mut rng = StdRng::seed_from_u64(42);

        let region = config.region("Europe").unwrap();
        let (value, volume) = assembler.country_breakdown(&mut rng, region, 576.0, 8100.0);

        let expected: Vec<&str> = region.countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(value.keys().map(|k| k.as_str()).collect::<Vec<_>>(), expected);
        assert_eq!(volume.keys().map(|k| k.as_str()).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_country_breakdown_scaled_by_share() {
        let config = MarketConfig::default();
        let assembler = GeographyAssembler::new(&config);
        let mut rng = StdRng::seed_from_u64(42);

        let region = config.region("North America").unwrap();
        let (value, _) = assembler.country_breakdown(&mut rng, region, 1088.0, 15300.0);

        // U.S. 2021 ~ 1088 * 0.82 = 892.16, within value noise
        let us = value["U.S."].get(2021).unwrap().as_f64();
        assert!((us - 892.16).abs() <= 892.16 * config.noise.value + 0.05);
    }
}
