//! Year-over-year change between two analysis reports.

use std::collections::HashMap;

use devindex_core::types::DevelopmentTier;
use serde::{Deserialize, Serialize};

use crate::report::{AnalysisReport, EntityIndex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityChange {
    pub id: String,
    pub name: String,
    pub previous_composite: f64,
    pub current_composite: f64,
    /// `current − previous`.
    pub composite_index_change: f64,
    /// Change relative to the previous composite, ×100. 0 when the previous
    /// composite is 0.
    pub percent_change: f64,
    pub previous_tier: DevelopmentTier,
    pub current_tier: DevelopmentTier,
    /// `current tier number − previous tier number`. Negative means the
    /// entity moved toward tier 1.
    pub cluster_change: i8,
}

impl EntityChange {
    fn between(previous: &EntityIndex, current: &EntityIndex) -> Self {
        let change = current.composite_index - previous.composite_index;
        let percent_change = if previous.composite_index == 0.0 {
            0.0
        } else {
            change / previous.composite_index * 100.0
        };
        Self {
            id: current.id.clone(),
            name: current.name.clone(),
            previous_composite: previous.composite_index,
            current_composite: current.composite_index,
            composite_index_change: change,
            percent_change,
            previous_tier: previous.tier,
            current_tier: current.tier,
            cluster_change: current.tier.number() as i8 - previous.tier.number() as i8,
        }
    }

    pub fn improved_tier(&self) -> bool {
        self.cluster_change < 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearComparison {
    pub previous_year: i32,
    pub current_year: i32,
    /// Entities present in both reports, in current-report order.
    pub changes: Vec<EntityChange>,
    /// Ids only in the current report.
    pub added: Vec<String>,
    /// Ids only in the previous report.
    pub removed: Vec<String>,
}

/// Diff two reports by entity id.
///
/// Composites are population-relative, so a change reflects movement
/// against each year's own population.
pub fn compare_years(previous: &AnalysisReport, current: &AnalysisReport) -> YearComparison {
    let previous_by_id: HashMap<&str, &EntityIndex> =
        previous.entities.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut changes = Vec::new();
    let mut added = Vec::new();
    for entity in &current.entities {
        match previous_by_id.get(entity.id.as_str()) {
            Some(prev) => changes.push(EntityChange::between(prev, entity)),
            None => added.push(entity.id.clone()),
        }
    }

    let current_ids: std::collections::HashSet<&str> =
        current.entities.iter().map(|e| e.id.as_str()).collect();
    let removed = previous
        .entities
        .iter()
        .filter(|e| !current_ids.contains(e.id.as_str()))
        .map(|e| e.id.clone())
        .collect();

    YearComparison {
        previous_year: previous.year,
        current_year: current.year,
        changes,
        added,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use devindex_core::types::{CategoryScores, InequalityMetrics, QualityLabel};
    use devindex_inequality::SummaryStatistics;

    use super::*;
    use crate::report::ClusteringReport;

    fn index(id: &str, composite: f64) -> EntityIndex {
        EntityIndex {
            id: id.to_string(),
            name: id.to_uppercase(),
            region: "R".to_string(),
            composite_index: composite,
            categories: CategoryScores::default(),
            tier: DevelopmentTier::from_composite(composite),
            indicators: BTreeMap::new(),
            normalized: BTreeMap::new(),
        }
    }

    fn report(year: i32, entities: Vec<EntityIndex>) -> AnalysisReport {
        AnalysisReport {
            year,
            region_id: "ALL".to_string(),
            entities,
            inequality: InequalityMetrics::default(),
            clustering: ClusteringReport {
                k: 0,
                clusters: Vec::new(),
                centroids: Vec::new(),
                silhouette_score: 0.0,
                cluster_quality: QualityLabel::Poor,
                inertia: 0.0,
                iterations: 0,
                converged: false,
                assignments: Vec::new(),
            },
            ranking: Vec::new(),
            summary: SummaryStatistics::default(),
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn change_and_percent() {
        let prev = report(2023, vec![index("a", 0.4), index("b", 0.0)]);
        let cur = report(2024, vec![index("a", 0.5), index("b", 0.3)]);
        let cmp = compare_years(&prev, &cur);

        let a = &cmp.changes[0];
        assert!((a.composite_index_change - 0.1).abs() < 1e-12);
        assert!((a.percent_change - 25.0).abs() < 1e-9);
        assert_eq!(a.cluster_change, 0);

        let b = &cmp.changes[1];
        assert_eq!(b.percent_change, 0.0);
        assert_eq!(b.cluster_change, -1);
        assert!(b.improved_tier());
    }

    #[test]
    fn tier_drop_is_positive() {
        let prev = report(2023, vec![index("a", 0.8)]);
        let cur = report(2024, vec![index("a", 0.2)]);
        assert_eq!(compare_years(&prev, &cur).changes[0].cluster_change, 3);
    }

    #[test]
    fn added_and_removed_entities() {
        let prev = report(2023, vec![index("a", 0.4), index("gone", 0.5)]);
        let cur = report(2024, vec![index("new", 0.6), index("a", 0.5)]);
        let cmp = compare_years(&prev, &cur);
        assert_eq!(cmp.changes.len(), 1);
        assert_eq!(cmp.added, vec!["new".to_string()]);
        assert_eq!(cmp.removed, vec!["gone".to_string()]);
        assert_eq!((cmp.previous_year, cmp.current_year), (2023, 2024));
    }
}
