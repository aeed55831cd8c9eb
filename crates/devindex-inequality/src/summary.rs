use serde::{Deserialize, Serialize};

use crate::metrics::std_deviation;

/// Descriptive statistics over a population's composite scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    pub total_entities: usize,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub std_deviation: f64,
}

impl SummaryStatistics {
    /// All fields are 0 for an empty slice.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        Self {
            total_entities: values.len(),
            average: values.iter().sum::<f64>() / values.len() as f64,
            max,
            min,
            std_deviation: std_deviation(values),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_scores() {
        let s = SummaryStatistics::from_values(&[0.2, 0.8, 0.5]);
        assert_eq!(s.total_entities, 3);
        assert!((s.average - 0.5).abs() < 1e-12);
        assert_eq!(s.max, 0.8);
        assert_eq!(s.min, 0.2);
        assert!(s.std_deviation > 0.0);
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(SummaryStatistics::from_values(&[]), SummaryStatistics::default());
    }
}
