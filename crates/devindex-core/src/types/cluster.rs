use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of one k-means run over scalar composite scores.
///
/// Owned by the caller; nothing mutates it after it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterModel {
    pub k: usize,
    pub centroids: Vec<f64>,
    /// Entity id → 0-based cluster index.
    pub assignments: BTreeMap<String, usize>,
    /// Entity id → distance to its assigned centroid.
    pub distances: BTreeMap<String, f64>,
    /// Sum of squared distances to assigned centroids.
    pub inertia: f64,
    /// Assignment/update cycles actually performed.
    pub iterations: usize,
    pub converged: bool,
    pub silhouette: f64,
    /// Inertia after each assignment step, in order.
    pub inertia_history: Vec<f64>,
}

impl ClusterModel {
    /// Member ids per cluster, indexed by cluster.
    pub fn members(&self) -> Vec<Vec<&str>> {
        let mut members = vec![Vec::new(); self.k];
        for (id, &cluster) in &self.assignments {
            if let Some(slot) = members.get_mut(cluster) {
                slot.push(id.as_str());
            }
        }
        members
    }

    pub fn cluster_of(&self, entity_id: &str) -> Option<usize> {
        self.assignments.get(entity_id).copied()
    }

    pub fn quality(&self) -> QualityLabel {
        QualityLabel::from_silhouette(self.silhouette)
    }
}

/// Categorical reading of a silhouette score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLabel {
    /// `>= 0.7` Excellent, `>= 0.5` Good, `>= 0.25` Fair, else Poor.
    pub fn from_silhouette(silhouette: f64) -> Self {
        if silhouette >= 0.7 {
            Self::Excellent
        } else if silhouette >= 0.5 {
            Self::Good
        } else if silhouette >= 0.25 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
