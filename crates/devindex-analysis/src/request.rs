use devindex_core::types::Entity;
use serde::{Deserialize, Serialize};

/// Input to a full analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(alias = "data")]
    pub entities: Vec<Entity>,
    pub year: i32,
    /// Reported as-is; `None` falls back to the configured default region.
    #[serde(default)]
    pub region_id: Option<String>,
    /// Overrides the configured default cluster count.
    #[serde(default)]
    pub cluster_count: Option<usize>,
}

impl AnalysisRequest {
    pub fn new(entities: Vec<Entity>, year: i32) -> Self {
        Self {
            entities,
            year,
            region_id: None,
            cluster_count: None,
        }
    }

    pub fn with_region(mut self, region_id: impl Into<String>) -> Self {
        self.region_id = Some(region_id.into());
        self
    }

    pub fn with_cluster_count(mut self, k: usize) -> Self {
        self.cluster_count = Some(k);
        self
    }
}

/// Input to a standalone clustering run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusteringRequest {
    #[serde(alias = "data")]
    pub entities: Vec<Entity>,
    #[serde(default, alias = "numberOfClusters")]
    pub cluster_count: Option<usize>,
}

impl ClusteringRequest {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            cluster_count: None,
        }
    }

    pub fn with_cluster_count(mut self, k: usize) -> Self {
        self.cluster_count = Some(k);
        self
    }
}
