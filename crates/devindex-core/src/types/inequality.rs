use serde::{Deserialize, Serialize};

/// Distributional statistics over a population's composite scores.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InequalityMetrics {
    /// Coefficient of variation, as a percentage.
    pub cv: f64,
    pub gini: f64,
    pub theil: f64,
    /// P90 / P10 (0 when fewer than 10 observations or P10 is 0).
    pub decile_ratio: f64,
    /// Population standard deviation (divides by n).
    pub std_deviation: f64,
}
