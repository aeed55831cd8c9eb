//! Coefficient of variation, Gini, Theil, decile ratio, standard deviation.

use devindex_core::constants::DECILE_MIN_OBSERVATIONS;
use devindex_core::types::InequalityMetrics;
use statrs::statistics::Statistics;
use tracing::trace;

use crate::sorted_copy;

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().mean()
}

/// Population standard deviation (divides by n). 0 for empty input.
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sd = values.iter().population_std_dev();
    if sd.is_finite() {
        sd
    } else {
        0.0
    }
}

/// Standard deviation over mean, as a percentage.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let mean = mean(values);
    if mean == 0.0 {
        return 0.0;
    }
    std_deviation(values) / mean * 100.0
}

/// Gini coefficient in its rank-weighted closed form:
/// `2·Σ(i·x_i) / (n·Σx) − (n+1)/n` over ascending values, `i` from 1.
///
/// Equal to the pairwise `ΣΣ|x_i − x_j| / (2n²·mean)` definition.
pub fn gini(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let total: f64 = sorted.iter().sum();
    if total == 0.0 {
        return 0.0;
    }
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (i + 1) as f64 * x)
        .sum();
    let n = n as f64;
    2.0 * weighted / (n * total) - (n + 1.0) / n
}

/// Theil T index. Non-positive entries contribute nothing but still count
/// toward `n`.
pub fn theil(values: &[f64]) -> f64 {
    let mean = mean(values);
    if mean == 0.0 {
        return 0.0;
    }
    let sum: f64 = values
        .iter()
        .filter(|&&x| x > 0.0)
        .map(|&x| {
            let ratio = x / mean;
            ratio * ratio.ln()
        })
        .sum();
    sum / values.len() as f64
}

/// Ratio of the 90th to the 10th percentile observation.
///
/// Uses `sorted[floor(0.9n)] / sorted[floor(0.1n)]` without interpolation.
/// 0 below ten observations or when the lower decile is 0.
pub fn decile_ratio(values: &[f64]) -> f64 {
    let n = values.len();
    if n < DECILE_MIN_OBSERVATIONS {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let top = sorted[(0.9 * n as f64).floor() as usize];
    let bottom = sorted[(0.1 * n as f64).floor() as usize];
    if bottom == 0.0 {
        return 0.0;
    }
    top / bottom
}

/// All five measures over one composite-score vector.
pub fn inequality(values: &[f64]) -> InequalityMetrics {
    let metrics = InequalityMetrics {
        cv: coefficient_of_variation(values),
        gini: gini(values),
        theil: theil(values),
        decile_ratio: decile_ratio(values),
        std_deviation: std_deviation(values),
    };
    trace!(
        n = values.len(),
        gini = metrics.gini,
        theil = metrics.theil,
        "computed inequality metrics"
    );
    metrics
}
