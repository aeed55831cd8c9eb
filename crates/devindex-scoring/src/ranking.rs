//! Rank and percentile by composite index.

use serde::{Deserialize, Serialize};

/// Position of one entity when sorted descending by composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub entity_id: String,
    pub composite: f64,
    /// 1-based; rank 1 is the most developed.
    pub rank: usize,
    /// `rank / n × 100`.
    pub percentile: f64,
}

/// Rank `(entity_id, composite)` pairs descending by composite.
///
/// The sort is stable: ties keep their input order.
pub fn rank_by_composite<'a, I>(scores: I) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut entries: Vec<(&str, f64)> = scores.into_iter().collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let n = entries.len() as f64;
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (id, composite))| RankedEntry {
            entity_id: id.to_string(),
            composite,
            rank: i + 1,
            percentile: (i + 1) as f64 / n * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_descending_with_percentiles() {
        let ranked = rank_by_composite([("a", 0.2), ("b", 0.9), ("c", 0.5), ("d", 0.7)]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.entity_id.as_str()).collect();
        assert_eq!(ids, ["b", "d", "c", "a"]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[0].percentile, 25.0);
        assert_eq!(ranked[3].percentile, 100.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_by_composite([("x", 0.5), ("y", 0.5), ("z", 0.5)]);
        let ids: Vec<&str> = ranked.iter().map(|r| r.entity_id.as_str()).collect();
        assert_eq!(ids, ["x", "y", "z"]);
    }

    #[test]
    fn empty_input() {
        assert!(rank_by_composite(std::iter::empty()).is_empty());
    }
}
