//! Output writing and the post-run summary
//!
//! Serializes each dataset as 2-space-indented JSON. Any I/O or
//! serialization failure aborts the run; there is no partial-write
//! recovery, the whole document is regenerated on the next run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ctmarket_core::MarketDataset;

use crate::assembler::BY_COUNTRY;
use crate::config::MarketConfig;
use crate::error::{GeneratorError, Result};
use crate::orchestrator::MarketOutput;

/// Write one dataset as pretty JSON, creating parent directories first
pub fn write_dataset(dataset: &MarketDataset, path: &Path) -> Result<()> {
    let io_err = |source| GeneratorError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    // Drop would swallow the final flush's I/O error
    writer.flush().map_err(io_err)?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Write both documents to their configured paths
pub fn write_output(output: &MarketOutput, config: &MarketConfig) -> Result<()> {
    write_dataset(&output.value, &config.output.value_path)?;
    write_dataset(&output.volume, &config.output.volume_path)?;
    Ok(())
}

/// Human-readable run summary: geography count, per-taxonomy segment
/// counts, year range, and output paths
pub fn render_summary(output: &MarketOutput, config: &MarketConfig) -> String {
    let mut summary = String::new();

    summary.push_str(&format!(
        "Generated {} dataset: {} geographies ({} regions, {} countries), years {}-{}\n",
        config.name,
        output.value.len(),
        config.regions.len(),
        config.geography_count() - config.regions.len(),
        config.years.start,
        config.years.end,
    ));

    summary.push_str(&format!(
        "  {}: {} parent categories\n",
        config.offering.name,
        config.offering.parents.len()
    ));
    for taxonomy in &config.flat_taxonomies {
        summary.push_str(&format!(
            "  {}: {} segments\n",
            taxonomy.name,
            taxonomy.segments.len()
        ));
    }
    summary.push_str(&format!(
        "  {}: {} countries across {} regions\n",
        BY_COUNTRY,
        config.geography_count() - config.regions.len(),
        config.regions.len()
    ));

    summary.push_str(&format!(
        "  value  -> {}\n  volume -> {}\n",
        config.output.value_path.display(),
        config.output.volume_path.display(),
    ));

    summary
}
