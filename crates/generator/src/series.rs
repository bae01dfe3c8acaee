//! Single time-series generation: compound growth plus bounded noise

use rand::Rng;

use ctmarket_core::{Measure, TimeSeries, YearRange};

/// Generate one series: for year index i,
/// `base * (1 + cagr)^i * (1 + U)` with U drawn uniformly from
/// `[-noise_amplitude, +noise_amplitude]` independently per year, rounded
/// by the measure. The first year carries no growth, only noise.
pub fn generate_series<R: Rng>(
    rng: &mut R,
    base: f64,
    cagr: f64,
    years: YearRange,
    measure: Measure,
    noise_amplitude: f64,
) -> TimeSeries {
    let mut series = TimeSeries::with_capacity(years.len());
    for (i, year) in years.iter().enumerate() {
        let growth = (1.0 + cagr).powi(i as i32);
        let noise = 1.0 + rng.gen_range(-noise_amplitude..=noise_amplitude);
        series.insert(year, measure.round(base * growth * noise));
    }
    series
}
