//! Silhouette and inertia for a finished partition.

use devindex_core::types::QualityLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterQuality {
    pub silhouette: f64,
    pub inertia: f64,
    pub label: QualityLabel,
}

/// Score a partition given per-point cluster indices and centroids.
pub fn evaluate(values: &[f64], assignment: &[usize], centroids: &[f64]) -> ClusterQuality {
    let silhouette = silhouette(values, assignment, centroids.len());
    ClusterQuality {
        silhouette,
        inertia: inertia(values, assignment, centroids),
        label: QualityLabel::from_silhouette(silhouette),
    }
}

/// Sum of squared distances from each point to its own centroid.
pub fn inertia(values: &[f64], assignment: &[usize], centroids: &[f64]) -> f64 {
    values
        .iter()
        .zip(assignment)
        .map(|(v, &c)| (v - centroids[c]).powi(2))
        .sum()
}

/// Mean silhouette over all points, in [-1, 1]. 0 for no points.
///
/// For a point, `a` is the mean distance to the other members of its
/// cluster (0 when it is alone) and `b` the smallest mean distance to the
/// members of any other non-empty cluster (0 when there is none).
pub fn silhouette(values: &[f64], assignment: &[usize], k: usize) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut members: Vec<Vec<f64>> = vec![Vec::new(); k];
    for (&value, &cluster) in values.iter().zip(assignment) {
        members[cluster].push(value);
    }

    let total: f64 = values
        .iter()
        .zip(assignment)
        .map(|(&value, &own)| {
            let own_members = &members[own];
            let a = if own_members.len() <= 1 {
                0.0
            } else {
                distance_sum(value, own_members) / (own_members.len() - 1) as f64
            };

            let b = members
                .iter()
                .enumerate()
                .filter(|(i, m)| *i != own && !m.is_empty())
                .map(|(_, m)| distance_sum(value, m) / m.len() as f64)
                .fold(None, |best: Option<f64>, d| Some(best.map_or(d, |b| b.min(d))))
                .unwrap_or(0.0);

            let scale = a.max(b);
            if scale == 0.0 {
                0.0
            } else {
                (b - a) / scale
            }
        })
        .sum();

    total / values.len() as f64
}

fn distance_sum(value: f64, others: &[f64]) -> f64 {
    others.iter().map(|o| (value - o).abs()).sum()
}
