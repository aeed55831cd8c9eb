//! Clustering configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLUSTER_COUNT, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_ITERATIONS,
    MIN_CLUSTER_COUNT,
};

/// Configuration for the k-means subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Cluster count when the request does not name one. Default: 4.
    pub default_k: Option<usize>,
    /// Smallest cluster count the service will run with. Default: 2.
    pub min_k: Option<usize>,
    /// Maximum Lloyd iterations. Default: 100.
    pub max_iterations: Option<usize>,
    /// Centroid movement below which iteration stops. Default: 0.001.
    pub convergence_threshold: Option<f64>,
    /// Seed for the first-centroid pick. Unset draws from entropy.
    pub seed: Option<u64>,
}

impl ClusteringConfig {
    pub fn effective_default_k(&self) -> usize {
        self.default_k.unwrap_or(DEFAULT_CLUSTER_COUNT)
    }

    pub fn effective_min_k(&self) -> usize {
        self.min_k.unwrap_or(MIN_CLUSTER_COUNT)
    }

    pub fn effective_max_iterations(&self) -> usize {
        self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    pub fn effective_convergence_threshold(&self) -> f64 {
        self.convergence_threshold
            .unwrap_or(DEFAULT_CONVERGENCE_THRESHOLD)
    }
}
