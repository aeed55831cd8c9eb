//! Lloyd's k-means with greedy farthest-point seeding.
//!
//! ```text
//! Seeded → Assigning → Updating → (Converged | MaxIterationsReached)
//! ```
//!
//! Assigning and Updating alternate until every centroid moves less than the
//! convergence threshold or the iteration cap is reached.

use std::collections::BTreeMap;

use devindex_core::constants::{
    DEFAULT_CLUSTER_COUNT, DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_MAX_ITERATIONS,
};
use devindex_core::errors::InputError;
use devindex_core::types::ClusterModel;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::quality;

/// Parameters for one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    pub k: usize,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
    /// Seed for the first centroid pick. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_CLUSTER_COUNT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            seed: None,
        }
    }
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Cluster using `config.seed` when set, otherwise an entropy-seeded RNG.
pub fn cluster_seeded(
    points: &[(String, f64)],
    config: &KMeansConfig,
) -> Result<ClusterModel, InputError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    cluster(points, config, &mut rng)
}

/// Cluster `points` into `config.k` groups, drawing the first centroid from
/// `rng`.
///
/// `k` must already be within `[1, points.len()]`; callers clamp it.
pub fn cluster<R: Rng + ?Sized>(
    points: &[(String, f64)],
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<ClusterModel, InputError> {
    validate(points, config)?;

    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let k = config.k;

    let mut centroids = seed_centroids(&values, k, rng);
    let mut assignment = assign(&values, &centroids);
    let mut inertia_history = vec![quality::inertia(&values, &assignment, &centroids)];
    let mut iterations = 0;
    let mut converged = false;

    for iteration in 0..config.max_iterations {
        let updated = update(&values, &assignment, k);
        iterations = iteration + 1;

        if has_converged(&centroids, &updated, config.convergence_threshold) {
            converged = true;
            break;
        }

        centroids = updated;
        assignment = assign(&values, &centroids);
        inertia_history.push(quality::inertia(&values, &assignment, &centroids));
    }

    // Final assignment is recomputed against the returned centroids so the
    // two are always consistent.
    let assignment = assign(&values, &centroids);
    let quality = quality::evaluate(&values, &assignment, &centroids);

    let mut assignments = BTreeMap::new();
    let mut distances = BTreeMap::new();
    for ((id, value), &cluster) in points.iter().zip(&assignment) {
        assignments.insert(id.clone(), cluster);
        distances.insert(id.clone(), (value - centroids[cluster]).abs());
    }

    debug!(
        points = points.len(),
        k,
        iterations,
        converged,
        silhouette = quality.silhouette,
        inertia = quality.inertia,
        "k-means finished"
    );

    Ok(ClusterModel {
        k,
        centroids,
        assignments,
        distances,
        inertia: quality.inertia,
        iterations,
        converged,
        silhouette: quality.silhouette,
        inertia_history,
    })
}

fn validate(points: &[(String, f64)], config: &KMeansConfig) -> Result<(), InputError> {
    if points.is_empty() {
        return Err(InputError::EmptyPopulation);
    }
    if config.k == 0 || config.k > points.len() {
        return Err(InputError::InvalidClusterCount {
            k: config.k,
            population: points.len(),
        });
    }
    if let Some((id, _)) = points.iter().find(|(_, v)| !v.is_finite()) {
        return Err(InputError::InvalidParameter {
            name: "points".to_string(),
            reason: format!("score for {id} is not finite"),
        });
    }
    if config.convergence_threshold.is_nan() || config.convergence_threshold <= 0.0 {
        return Err(InputError::InvalidParameter {
            name: "convergence_threshold".to_string(),
            reason: format!("must be positive, got {}", config.convergence_threshold),
        });
    }
    Ok(())
}

/// First centroid uniformly at random, then repeatedly the point farthest
/// from its nearest chosen centroid. Ties go to the earliest point.
pub(crate) fn seed_centroids<R: Rng + ?Sized>(values: &[f64], k: usize, rng: &mut R) -> Vec<f64> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(values[rng.gen_range(0..values.len())]);

    while centroids.len() < k {
        let mut farthest = 0;
        let mut farthest_distance = f64::NEG_INFINITY;
        for (i, &value) in values.iter().enumerate() {
            let nearest = centroids
                .iter()
                .map(|c| (value - c).abs())
                .fold(f64::INFINITY, f64::min);
            if nearest > farthest_distance {
                farthest_distance = nearest;
                farthest = i;
            }
        }
        centroids.push(values[farthest]);
    }
    centroids
}

/// Index of the nearest centroid; ties go to the lower index.
pub(crate) fn nearest(value: f64, centroids: &[f64]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, centroid) in centroids.iter().enumerate() {
        let distance = (value - centroid).abs();
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

fn assign(values: &[f64], centroids: &[f64]) -> Vec<usize> {
    values.iter().map(|&v| nearest(v, centroids)).collect()
}

/// Mean of each cluster's members. An empty cluster's centroid becomes 0.
fn update(values: &[f64], assignment: &[usize], k: usize) -> Vec<f64> {
    let mut sums = vec![0.0; k];
    let mut counts = vec![0usize; k];
    for (&value, &cluster) in values.iter().zip(assignment) {
        sums[cluster] += value;
        counts[cluster] += 1;
    }
    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| if count == 0 { 0.0 } else { sum / count as f64 })
        .collect()
}

fn has_converged(old: &[f64], new: &[f64], threshold: f64) -> bool {
    old.iter().zip(new).all(|(a, b)| (a - b).abs() < threshold)
}
