//! Report shapes returned by [`crate::AnalysisEngine`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use devindex_clustering::ClusterStats;
use devindex_core::types::{
    CategoryScores, DevelopmentTier, InequalityMetrics, QualityLabel,
};
use devindex_inequality::SummaryStatistics;
use devindex_scoring::RankedEntry;
use serde::{Deserialize, Serialize};

/// Scores of one entity within an analyzed population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityIndex {
    pub id: String,
    pub name: String,
    pub region: String,
    pub composite_index: f64,
    pub categories: CategoryScores,
    /// Threshold tier, independent of the k-means partition.
    pub tier: DevelopmentTier,
    /// Raw measurements as submitted.
    pub indicators: BTreeMap<String, f64>,
    /// Normalized values for measured indicators.
    pub normalized: BTreeMap<String, f64>,
}

/// Where k-means placed one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAssignment {
    pub id: String,
    pub name: String,
    pub cluster: usize,
    pub distance: f64,
    pub composite_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringReport {
    pub k: usize,
    pub clusters: Vec<ClusterStats>,
    pub centroids: Vec<f64>,
    pub silhouette_score: f64,
    pub cluster_quality: QualityLabel,
    pub inertia: f64,
    pub iterations: usize,
    pub converged: bool,
    pub assignments: Vec<EntityAssignment>,
}

impl ClusteringReport {
    pub fn assignment(&self, entity_id: &str) -> Option<&EntityAssignment> {
        self.assignments.iter().find(|a| a.id == entity_id)
    }
}

/// Full analysis of one population for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub year: i32,
    pub region_id: String,
    /// In request order.
    pub entities: Vec<EntityIndex>,
    pub inequality: InequalityMetrics,
    pub clustering: ClusteringReport,
    pub ranking: Vec<RankedEntry>,
    pub summary: SummaryStatistics,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn entity(&self, entity_id: &str) -> Option<&EntityIndex> {
        self.entities.iter().find(|e| e.id == entity_id)
    }

    /// Count of entities in each threshold tier, tier 1 first.
    pub fn tier_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for entity in &self.entities {
            counts[usize::from(entity.tier.number() - 1)] += 1;
        }
        counts
    }
}
