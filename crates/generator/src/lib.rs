//! Coiled Tubing Market dataset generator
//!
//! Deterministically fabricates the dashboard's hierarchical time-series
//! dataset (market value and volume per geography, taxonomy, and year) from
//! fixed share/growth tables and a seeded RNG, and writes it as two
//! indented JSON documents.

pub mod assembler;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod segments;
pub mod series;
pub mod writer;

// Re-export the main entry points at crate root
pub use config::MarketConfig;
pub use error::{GeneratorError, Result};
pub use orchestrator::{MarketGenerator, MarketOutput};
pub use writer::{render_summary, write_output};
