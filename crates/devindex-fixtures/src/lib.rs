//! Test fixture loader for sample district populations.
//!
//! Provides typed deserialization of the JSON fixtures under `data/` and
//! deterministic synthetic populations for property tests and benchmarks.

use std::path::PathBuf;

use devindex_core::types::{Category, Entity, IndicatorCatalog, IndicatorDefinition, Polarity};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Twelve districts across six regions, eight standard-catalog indicators
/// each, with a few measurements deliberately missing.
pub fn sample_districts() -> Vec<Entity> {
    load_fixture("districts/sample.json")
}

/// Six entities in two tight groups on a single `score` indicator:
/// {0.10, 0.12, 0.11} and {0.85, 0.88, 0.86}.
pub fn separated_population() -> Vec<Entity> {
    load_fixture("districts/separated.json")
}

/// Catalog holding only the `score` indicator used by
/// [`separated_population`].
pub fn score_catalog() -> IndicatorCatalog {
    IndicatorCatalog::new(vec![IndicatorDefinition::new(
        "score",
        Category::Economic,
        Polarity::HigherIsBetter,
    )])
    .expect("single-indicator catalog is valid")
}

/// `count` districts with every standard-catalog indicator drawn uniformly
/// from [0, 100). Deterministic for a given `seed`.
pub fn synthetic_districts(count: usize, seed: u64) -> Vec<Entity> {
    let catalog = IndicatorCatalog::standard();
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let mut entity = Entity::new(
                format!("SYN-{}", i + 1),
                format!("Synthetic District {}", i + 1),
                format!("R{}", i % 14),
            )
            .with_population(rng.gen_range(100_000.0..500_000.0));
            for def in catalog.iter() {
                entity.indicators.insert(def.id.clone(), rng.gen_range(0.0..100.0));
            }
            entity
        })
        .collect()
}

/// Scalar points keyed by id, in the shape the clusterer consumes.
pub fn scalar_points(values: &[f64]) -> Vec<(String, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (format!("p{i}"), v))
        .collect()
}
