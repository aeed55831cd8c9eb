//! Interpolated percentile and z-score standardization.

use statrs::statistics::Statistics;

use crate::sorted_copy;

/// Percentile `p` (0–100) by linear interpolation between the closest
/// ranks at position `(p/100)·(n−1)`. `p` is clamped to [0, 100].
/// 0 for empty input.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let position = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// `(value − mean) / sd`, or 0 when `sd` is 0.
pub fn z_score(value: f64, mean: f64, sd: f64) -> f64 {
    if sd == 0.0 {
        return 0.0;
    }
    (value - mean) / sd
}

/// Standardize every value against the slice's own mean and population
/// standard deviation.
pub fn z_scores(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mean = values.iter().mean();
    let sd = crate::metrics::std_deviation(values);
    values.iter().map(|&v| z_score(v, mean, sd)).collect()
}
