//! # devindex-inequality
//!
//! How unevenly a population's composite scores are spread.
//!
//! Every function here is pure over a borrowed slice. Functions that need
//! order statistics sort a private copy; the caller's slice is never
//! reordered. Degenerate input (empty, zero mean, too few observations)
//! yields 0 rather than an error.

pub mod metrics;
pub mod percentile;
pub mod summary;

pub use metrics::{
    coefficient_of_variation, decile_ratio, gini, inequality, std_deviation, theil,
};
pub use percentile::{percentile, z_score, z_scores};
pub use summary::SummaryStatistics;

/// Ascending sorted copy; NaN compares equal so it never panics.
pub(crate) fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}
