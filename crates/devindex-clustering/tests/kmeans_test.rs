use devindex_clustering::*;
use devindex_core::types::QualityLabel;
use devindex_fixtures::scalar_points;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn separated_groups_are_recovered_for_every_seed() {
    let points = scalar_points(&[0.10, 0.12, 0.11, 0.85, 0.88, 0.86]);
    for seed in 0..50 {
        let model = cluster_seeded(&points, &KMeansConfig::new(2).with_seed(seed)).unwrap();

        assert!(model.silhouette > 0.5, "seed {seed}: {}", model.silhouette);
        let low = model.cluster_of("p0").unwrap();
        let high = model.cluster_of("p3").unwrap();
        assert_ne!(low, high);
        for id in ["p1", "p2"] {
            assert_eq!(model.cluster_of(id), Some(low));
        }
        for id in ["p4", "p5"] {
            assert_eq!(model.cluster_of(id), Some(high));
        }
        assert_eq!(model.quality(), QualityLabel::Excellent);
    }
}

#[test]
fn assignments_and_distances_are_consistent() {
    let values: Vec<f64> = (0..60).map(|i| ((i * 37) % 100) as f64 / 100.0).collect();
    let points = scalar_points(&values);
    let model = cluster_seeded(&points, &KMeansConfig::new(4).with_seed(11)).unwrap();

    assert_eq!(model.assignments.len(), points.len());
    let sizes: usize = model.members().iter().map(Vec::len).sum();
    assert_eq!(sizes, points.len());

    for (id, value) in &points {
        let cluster = model.cluster_of(id).unwrap();
        assert!(cluster < model.k);
        let distance = model.distances[id];
        assert!((distance - (value - model.centroids[cluster]).abs()).abs() < 1e-12);
        for centroid in &model.centroids {
            assert!(distance <= (value - centroid).abs() + 1e-12);
        }
    }
}

#[test]
fn injected_rng_matches_seeded_entry_point() {
    let points = scalar_points(&[0.05, 0.3, 0.31, 0.6, 0.62, 0.95, 0.97]);
    let config = KMeansConfig::new(3).with_seed(7);
    let mut rng = StdRng::seed_from_u64(7);
    let injected = cluster(&points, &config, &mut rng).unwrap();
    let seeded = cluster_seeded(&points, &config).unwrap();
    assert_eq!(injected, seeded);
}

#[test]
fn duplicate_scores_leave_a_cluster_empty() {
    // Three identical points and k = 2: seeding picks the same value twice,
    // every point ties onto cluster 0, and cluster 1's centroid drops to 0.
    let points = scalar_points(&[0.7, 0.7, 0.7]);
    let model = cluster_seeded(&points, &KMeansConfig::new(2).with_seed(1)).unwrap();

    assert!(model.assignments.values().all(|&c| c == 0));
    assert_eq!(model.centroids[1], 0.0);
    assert!((model.centroids[0] - 0.7).abs() < 1e-12);
    assert_eq!(model.silhouette, 0.0);
}

#[test]
fn inertia_history_starts_at_seeding() {
    let points = scalar_points(&[0.1, 0.2, 0.4, 0.5, 0.8, 0.9]);
    let model = cluster_seeded(&points, &KMeansConfig::new(2).with_seed(3)).unwrap();
    assert!(!model.inertia_history.is_empty());
    let last = *model.inertia_history.last().unwrap();
    assert!((last - model.inertia).abs() < 1e-12);
}

#[test]
fn cluster_stats_cover_every_point() {
    let values = [0.10, 0.12, 0.11, 0.85, 0.88, 0.86];
    let points = scalar_points(&values);
    let model = cluster_seeded(&points, &KMeansConfig::new(2).with_seed(4)).unwrap();
    let stats = cluster_stats(
        &model,
        points.iter().map(|(id, v)| (id.as_str(), id.as_str(), *v)),
    );
    assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), values.len());
    for s in &stats {
        assert!(s.min_index <= s.avg_composite_index && s.avg_composite_index <= s.max_index);
    }
}
