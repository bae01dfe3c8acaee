//! Configuration for the market dataset generator
//!
//! Carries the fixed market tables as defaults and supports JSON
//! configuration files for:
//! - Geography hierarchy (regions, countries, shares, CAGRs)
//! - Segment taxonomies (hierarchical offering + six flat axes)
//! - Global 2021 base magnitudes, year range, seed
//! - Noise/perturbation amplitudes and output paths

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use ctmarket_core::{Measure, YearRange};

use crate::error::{GeneratorError, Result};

/// Root configuration for one generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Dataset name/identifier
    #[serde(default = "default_dataset_name")]
    pub name: String,

    /// Years covered by every series
    #[serde(default)]
    pub years: YearRange,

    /// PRNG seed; one seed fixes the whole output
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Global market value in the first year (USD millions)
    #[serde(default = "default_global_value_base")]
    pub global_value_base: f64,

    /// Global market volume in the first year (units)
    #[serde(default = "default_global_volume_base")]
    pub global_volume_base: f64,

    /// Regions with their shares, CAGRs, and countries
    #[serde(default = "default_regions")]
    pub regions: Vec<RegionConfig>,

    /// The hierarchical "By Offering" taxonomy
    #[serde(default = "default_offering")]
    pub offering: OfferingConfig,

    /// Flat taxonomies, in output order
    #[serde(default = "default_flat_taxonomies")]
    pub flat_taxonomies: Vec<FlatTaxonomyConfig>,

    /// Per-year multiplicative noise amplitudes
    #[serde(default)]
    pub noise: NoiseConfig,

    /// Per-series CAGR perturbation amplitudes
    #[serde(default)]
    pub perturbation: PerturbationConfig,

    /// Output file locations
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_dataset_name() -> String {
    "Coiled Tubing Market".to_string()
}

fn default_seed() -> u64 {
    42
}

fn default_global_value_base() -> f64 {
    3200.0 // $3.2B in USD millions
}

fn default_global_volume_base() -> f64 {
    45000.0 // tubing/service units
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            name: default_dataset_name(),
            years: YearRange::default(),
            seed: default_seed(),
            global_value_base: default_global_value_base(),
            global_volume_base: default_global_volume_base(),
            regions: default_regions(),
            offering: default_offering(),
            flat_taxonomies: default_flat_taxonomies(),
            noise: NoiseConfig::default(),
            perturbation: PerturbationConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl MarketConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| GeneratorError::Io {
                path: path.as_ref().display().to_string(),
                source,
            })?;

        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GeneratorError::Config(e.to_string()))
    }

    /// Look up a region by name
    pub fn region(&self, name: &str) -> Option<&RegionConfig> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Total number of geographies (regions + countries)
    pub fn geography_count(&self) -> usize {
        self.regions.len() + self.regions.iter().map(|r| r.countries.len()).sum::<usize>()
    }
}

/// One region: its share of the global market, growth rate, and countries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub name: String,
    /// Share of the global base magnitude
    pub share: f64,
    /// Compound annual growth rate
    pub cagr: f64,
    /// Countries in hierarchy order; shares are fractions of the region
    pub countries: Vec<CountryConfig>,
}

/// One country and its share of the parent region's base magnitude
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryConfig {
    pub name: String,
    pub share: f64,
}

/// The two-level "By Offering" taxonomy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingConfig {
    #[serde(default = "default_offering_name")]
    pub name: String,
    pub parents: Vec<OfferingParentConfig>,
}

fn default_offering_name() -> String {
    "By Offering".to_string()
}

/// A parent category: its share of the total and its child shares.
///
/// Child shares are fractions of the parent's magnitude; like every share
/// table here they are taken as-is and never validated to sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferingParentConfig {
    pub name: String,
    pub share: f64,
    pub children: IndexMap<String, f64>,
}

/// A flat taxonomy: independent segment shares of the geography total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatTaxonomyConfig {
    pub name: String,
    pub segments: IndexMap<String, f64>,
}

/// Per-year multiplicative noise amplitudes by measure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    #[serde(default = "default_value_noise")]
    pub value: f64,
    #[serde(default = "default_volume_noise")]
    pub volume: f64,
}

fn default_value_noise() -> f64 {
    Measure::Value.noise_amplitude()
}

fn default_volume_noise() -> f64 {
    Measure::Volume.noise_amplitude()
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            value: default_value_noise(),
            volume: default_volume_noise(),
        }
    }
}

impl NoiseConfig {
    pub fn for_measure(&self, measure: Measure) -> f64 {
        match measure {
            Measure::Value => self.value,
            Measure::Volume => self.volume,
        }
    }
}

/// CAGR perturbation amplitudes, one independent uniform draw per series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerturbationConfig {
    /// Per-segment offset within a taxonomy
    #[serde(default = "default_segment_perturbation")]
    pub segment: f64,
    /// Per-country offset for a region's "By Country" breakdown
    #[serde(default = "default_by_country_perturbation")]
    pub by_country: f64,
    /// Per-country offset for the country's own full dataset
    #[serde(default = "default_country_perturbation")]
    pub country: f64,
}

fn default_segment_perturbation() -> f64 {
    0.015
}

fn default_by_country_perturbation() -> f64 {
    0.010
}

fn default_country_perturbation() -> f64 {
    0.008
}

impl Default for PerturbationConfig {
    fn default() -> Self {
        Self {
            segment: default_segment_perturbation(),
            by_country: default_by_country_perturbation(),
            country: default_country_perturbation(),
        }
    }
}

/// Where the two documents are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_value_path")]
    pub value_path: PathBuf,
    #[serde(default = "default_volume_path")]
    pub volume_path: PathBuf,
}

fn default_value_path() -> PathBuf {
    PathBuf::from("public/data/value.json")
}

fn default_volume_path() -> PathBuf {
    PathBuf::from("public/data/volume.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            value_path: default_value_path(),
            volume_path: default_volume_path(),
        }
    }
}

impl OutputConfig {
    /// Re-root both paths under a directory, keeping the file names
    pub fn under_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            value_path: dir.join("value.json"),
            volume_path: dir.join("volume.json"),
        }
    }

    pub fn path_for(&self, measure: Measure) -> &Path {
        match measure {
            Measure::Value => &self.value_path,
            Measure::Volume => &self.volume_path,
        }
    }
}

fn shares(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
    entries
        .iter()
        .map(|(name, share)| (name.to_string(), *share))
        .collect()
}

fn countries(entries: &[(&str, f64)]) -> Vec<CountryConfig> {
    entries
        .iter()
        .map(|(name, share)| CountryConfig {
            name: name.to_string(),
            share: *share,
        })
        .collect()
}

fn default_regions() -> Vec<RegionConfig> {
    vec![
        RegionConfig {
            name: "North America".to_string(),
            share: 0.34,
            cagr: 0.052,
            countries: countries(&[("U.S.", 0.82), ("Canada", 0.18)]),
        },
        RegionConfig {
            name: "Europe".to_string(),
            share: 0.18,
            cagr: 0.048,
            countries: countries(&[
                ("U.K.", 0.18),
                ("Germany", 0.20),
                ("Italy", 0.12),
                ("France", 0.15),
                ("Spain", 0.10),
                ("Russia", 0.13),
                ("Rest of Europe", 0.12),
            ]),
        },
        RegionConfig {
            name: "Asia Pacific".to_string(),
            share: 0.22,
            cagr: 0.072,
            countries: countries(&[
                ("China", 0.32),
                ("India", 0.18),
                ("Japan", 0.16),
                ("South Korea", 0.10),
                ("ASEAN", 0.12),
                ("Australia", 0.05),
                ("Rest of Asia Pacific", 0.07),
            ]),
        },
        RegionConfig {
            name: "Latin America".to_string(),
            share: 0.10,
            cagr: 0.058,
            countries: countries(&[
                ("Brazil", 0.38),
                ("Argentina", 0.22),
                ("Mexico", 0.25),
                ("Rest of Latin America", 0.15),
            ]),
        },
        RegionConfig {
            name: "Middle East & Africa".to_string(),
            share: 0.16,
            cagr: 0.065,
            countries: countries(&[
                ("GCC", 0.55),
                ("South Africa", 0.20),
                ("Rest of Middle East & Africa", 0.25),
            ]),
        },
    ]
}

fn default_offering() -> OfferingConfig {
    OfferingConfig {
        name: default_offering_name(),
        parents: vec![
            OfferingParentConfig {
                name: "Products and Equipment".to_string(),
                share: 0.55,
                children: shares(&[
                    ("Coiled Tubing Strings and Pipes", 0.22),
                    ("Coiled Tubing Units", 0.18),
                    ("Reels", 0.08),
                    ("Injector Heads", 0.10),
                    ("Well Control and Pressure Control Equipment", 0.14),
                    ("Downhole Tools & Accessories", 0.10),
                    ("Pumping, Nitrogen and Fluid Support Equipment", 0.12),
                    ("Control, Monitoring & Instrumentation Systems", 0.06),
                ]),
            },
            OfferingParentConfig {
                name: "Services".to_string(),
                share: 0.45,
                children: shares(&[
                    ("Well Intervention Services", 0.22),
                    ("Stimulation Support Services", 0.16),
                    ("Logging & Conveyance Services", 0.12),
                    ("Fishing, Milling & Remedial Services", 0.14),
                    ("Completion & Workover Support Services", 0.13),
                    ("Coiled Tubing Drilling Services", 0.12),
                    ("Plug & Abandonment Support Services", 0.11),
                ]),
            },
        ],
    }
}

fn default_flat_taxonomies() -> Vec<FlatTaxonomyConfig> {
    vec![
        FlatTaxonomyConfig {
            name: "By Operational Task".to_string(),
            segments: shares(&[
                ("Circulation", 0.15),
                ("Pumping", 0.18),
                ("Chemical Injection", 0.10),
                ("Nitrogen Lift and Nitrogen Pumping", 0.14),
                ("Logging Conveyance", 0.12),
                ("Perforation Conveyance", 0.10),
                ("Mechanical Manipulation", 0.11),
                ("Fishing and Milling", 0.10),
            ]),
        },
        FlatTaxonomyConfig {
            name: "By Material Type".to_string(),
            segments: shares(&[
                ("Carbon Steel", 0.35),
                ("Low-Alloy and High-Strength Steel", 0.25),
                ("Stainless Steel", 0.18),
                ("Duplex and Super Duplex Alloys", 0.13),
                ("Nickel-Based and Corrosion-Resistant Alloys", 0.09),
            ]),
        },
        FlatTaxonomyConfig {
            name: "By Tubing Outer Diameter".to_string(),
            segments: shares(&[
                ("Up to 1.5 inch", 0.30),
                ("Above 1.5 to 2.0 inch", 0.35),
                ("Above 2.0 to 2.375 inch", 0.22),
                ("Above 2.375 inch", 0.13),
            ]),
        },
        FlatTaxonomyConfig {
            name: "By Application".to_string(),
            segments: shares(&[("Onshore", 0.65), ("Offshore", 0.35)]),
        },
        FlatTaxonomyConfig {
            name: "By Well Type".to_string(),
            segments: shares(&[
                ("Oil Wells", 0.32),
                ("Gas Wells", 0.22),
                ("Injection Wells", 0.12),
                ("Horizontal and Deviated Wells", 0.15),
                ("Mature Wells", 0.11),
                ("HPHT Wells", 0.08),
            ]),
        },
        FlatTaxonomyConfig {
            name: "By End User".to_string(),
            segments: shares(&[
                ("NOCs", 0.28),
                ("IOCs and Independent E&P Companies", 0.30),
                ("Oilfield Service Companies", 0.22),
                ("Drilling Contractors", 0.12),
                ("Geothermal Operators", 0.08),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geography_tables() {
        let config = MarketConfig::default();

        assert_eq!(config.regions.len(), 5);
        // 5 regions + 23 countries (2 + 7 + 7 + 4 + 3)
        assert_eq!(config.geography_count(), 28);
        assert_eq!(
            config.regions.iter().map(|r| r.countries.len()).sum::<usize>(),
            23
        );

        let na = config.region("North America").unwrap();
        assert_eq!(na.share, 0.34);
        assert_eq!(na.cagr, 0.052);
        assert_eq!(na.countries.len(), 2);
        assert_eq!(na.countries[0].name, "U.S.");
        assert_eq!(na.countries[0].share, 0.82);
    }

    #[test]
    fn test_default_taxonomy_tables() {
        let config = MarketConfig::default();

        assert_eq!(config.offering.parents.len(), 2);
        assert_eq!(config.offering.parents[0].children.len(), 8);
        assert_eq!(config.offering.parents[1].children.len(), 7);

        let names: Vec<&str> = config
            .flat_taxonomies
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
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
    fn test_region_base_magnitudes() {
        let config = MarketConfig::default();
        let na = config.region("North America").unwrap();

        let value_base = config.global_value_base * na.share;
        assert!((value_base - 1088.0).abs() < 1e-9);

        let us_base = value_base * na.countries[0].share;
        assert!((us_base - 892.16).abs() < 1e-9);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = MarketConfig::from_json("{}").unwrap();
        assert_eq!(config.name, "Coiled Tubing Market");
        assert_eq!(config.seed, 42);
        assert_eq!(config.years.len(), 13);
        assert_eq!(config.regions.len(), 5);
    }

    #[test]
    fn test_parse_overrides() {
        let json = r#"{
            "seed": 7,
            "global_value_base": 1000.0,
            "years": { "start": 2022, "end": 2026 },
            "output": { "value_path": "out/v.json", "volume_path": "out/q.json" }
        }"#;

        let config = MarketConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.global_value_base, 1000.0);
        assert_eq!(config.years.len(), 5);
        assert_eq!(config.output.value_path, PathBuf::from("out/v.json"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = MarketConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GeneratorError::Config(_)));
    }

    #[test]
    fn test_output_under_dir() {
        let output = OutputConfig::under_dir("data");
        assert_eq!(output.path_for(Measure::Value), Path::new("data/value.json"));
        assert_eq!(
            output.path_for(Measure::Volume),
            Path::new("data/volume.json")
        );
    }
}
