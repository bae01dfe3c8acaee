//! Top-level orchestration - the full two-document generation pass
//!
//! Walks the region/country hierarchy depth-first with a single seeded RNG,
//! so the draw order (region value taxonomies, region volume taxonomies,
//! by-country breakdown, then each country's own datasets) fixes the entire
//! output for a given seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ctmarket_core::{MarketDataset, Measure, TaxonomyData};

use crate::assembler::{BY_COUNTRY, GeographyAssembler};
use crate::config::MarketConfig;

/// The value and volume documents produced by one generation pass
#[derive(Debug, Clone, PartialEq)]
pub struct MarketOutput {
    pub value: MarketDataset,
    pub volume: MarketDataset,
}

/// Generates the complete market dataset pair from a seeded RNG
pub struct MarketGenerator {
    config: MarketConfig,
    rng: StdRng,
}

impl MarketGenerator {
    /// Create a generator seeded from the configured seed
    pub fn new(config: MarketConfig) -> Self {
        let seed = config.seed;
        Self::with_seed(config, seed)
    }

    /// Create a generator with an explicit seed override
    pub fn with_seed(config: MarketConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Run one full generation pass.
    ///
    /// Regions appear in config order, each followed by its countries as
    /// top-level siblings; only regions carry a "By Country" taxonomy.
    pub fn generate(&mut self) -> MarketOutput {
        let assembler = GeographyAssembler::new(&self.config);
        let country_perturbation = self.config.perturbation.country;

        let mut value = MarketDataset::new();
        let mut volume = MarketDataset::new();

        for region in &self.config.regions {
            let region_value_base = self.config.global_value_base * region.share;
            let region_volume_base = self.config.global_volume_base * region.share;

            log::info!(
                "Generating region '{}' (value base {:.1}, volume base {:.0}, cagr {:.3})",
                region.name,
                region_value_base,
                region_volume_base,
                region.cagr
            );

            let mut region_value =
                assembler.assemble(&mut self.rng, Measure::Value, region_value_base, region.cagr);
            let mut region_volume = assembler.assemble(
                &mut self.rng,
                Measure::Volume,
                region_volume_base,
                region.cagr,
            );

            let (by_country_value, by_country_volume) = assembler.country_breakdown(
                &mut self.rng,
                region,
                region_value_base,
                region_volume_base,
            );
            region_value.insert(BY_COUNTRY, TaxonomyData::Flat(by_country_value));
            region_volume.insert(BY_COUNTRY, TaxonomyData::Flat(by_country_volume));

            value.insert(region.name.clone(), region_value);
            volume.insert(region.name.clone(), region_volume);

            for country in &region.countries {
                let cagr = region.cagr
                    + self
                        .rng
                        .gen_range(-country_perturbation..=country_perturbation);
                let country_value_base = region_value_base * country.share;
                let country_volume_base = region_volume_base * country.share;

                log::debug!(
                    "Generating country '{}' (value base {:.2}, cagr {:.4})",
                    country.name,
                    country_value_base,
                    cagr
                );

                let country_value =
                    assembler.assemble(&mut self.rng, Measure::Value, country_value_base, cagr);
                let country_volume =
                    assembler.assemble(&mut self.rng, Measure::Volume, country_volume_base, cagr);

                value.insert(country.name.clone(), country_value);
                volume.insert(country.name.clone(), country_volume);
            }
        }

        MarketOutput { value, volume }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_all_geographies() {
        let mut generator = MarketGenerator::new(MarketConfig::default());
        let output = generator.generate();

        // 5 regions + 23 countries
        assert_eq!(output.value.len(), 28);
        assert_eq!(output.volume.len(), 28);
        assert!(output.value.get("North America").is_some());
        assert!(output.value.get("U.S.").is_some());
        assert!(output.value.get("Rest of Middle East & Africa").is_some());
    }

    #[test]
    fn test_countries_follow_their_region() {
        let mut generator = MarketGenerator::new(MarketConfig::default());
        let output = generator.generate();

        let names: Vec<&str> = output.value.iter().map(|(name, _)| name).collect();
        assert_eq!(&names[..3], &["North America", "U.S.", "Canada"]);
        assert_eq!(names[3], "Europe");
    }

    #[test]
    fn test_only_regions_have_by_country() {
        let config = MarketConfig::default();
        let mut generator = MarketGenerator::new(config.clone());
        let output = generator.generate();

        for region in &config.regions {
            let entry = output.value.get(&region.name).unwrap();
            let by_country = entry.get(BY_COUNTRY).unwrap();
            assert_eq!(by_country.segment_count(), region.countries.len());

            for country in &region.countries {
                let entry = output.value.get(&country.name).unwrap();
                assert!(!entry.contains(BY_COUNTRY), "{} has By Country", country.name);
            }
        }
    }

    #[test]
    fn test_same_seed_identical_output() {
        let mut first = MarketGenerator::with_seed(MarketConfig::default(), 42);
        let mut second = MarketGenerator::with_seed(MarketConfig::default(), 42);

        assert_eq!(first.generate(), second.generate());
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut first = MarketGenerator::with_seed(MarketConfig::default(), 42);
        let mut second = MarketGenerator::with_seed(MarketConfig::default(), 43);

        assert_ne!(first.generate(), second.generate());
    }
}
