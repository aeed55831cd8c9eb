/// Cluster count used when the caller does not request one.
pub const DEFAULT_CLUSTER_COUNT: usize = 4;

/// Smallest cluster count the analysis service will run with.
pub const MIN_CLUSTER_COUNT: usize = 2;

/// Upper bound on Lloyd iterations per clustering call.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Centroids moving less than this between iterations are considered converged.
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Minimum population for a meaningful decile ratio.
pub const DECILE_MIN_OBSERVATIONS: usize = 10;

/// Accepted analysis year range (inclusive).
pub const MIN_ANALYSIS_YEAR: i32 = 2000;
pub const MAX_ANALYSIS_YEAR: i32 = 2100;

/// Region id reported when the caller does not scope the analysis.
pub const DEFAULT_REGION_ID: &str = "ALL";

/// Default category weights. They sum to 1.0.
pub const DEFAULT_WEIGHT_ECONOMIC: f64 = 0.30;
pub const DEFAULT_WEIGHT_SOCIAL: f64 = 0.25;
pub const DEFAULT_WEIGHT_DEMOGRAPHIC: f64 = 0.15;
pub const DEFAULT_WEIGHT_INFRASTRUCTURE: f64 = 0.30;
