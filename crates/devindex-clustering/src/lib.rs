//! # devindex-clustering
//!
//! Partitions entities into `k` groups by composite score.
//!
//! Clustering is one-dimensional: a point is an `(entity id, score)` pair and
//! distance is absolute difference. Seeding takes one random pick and is
//! deterministic after it, so a fixed seed reproduces a run exactly.

pub mod kmeans;
pub mod quality;
pub mod stats;

pub use kmeans::{cluster, cluster_seeded, KMeansConfig};
pub use quality::{evaluate, inertia, silhouette, ClusterQuality};
pub use stats::{cluster_stats, ClusterMember, ClusterStats};
