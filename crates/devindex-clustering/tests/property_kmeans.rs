use devindex_clustering::*;
use devindex_fixtures::scalar_points;
use proptest::prelude::*;

fn arb_run() -> impl Strategy<Value = (Vec<f64>, usize, u64)> {
    prop::collection::vec(0.0f64..1.0, 1..80).prop_flat_map(|values| {
        let n = values.len();
        (Just(values), 1..=n.min(8), any::<u64>())
    })
}

proptest! {
    #[test]
    fn every_point_gets_a_valid_cluster((values, k, seed) in arb_run()) {
        let points = scalar_points(&values);
        let model = cluster_seeded(&points, &KMeansConfig::new(k).with_seed(seed)).unwrap();
        prop_assert_eq!(model.assignments.len(), values.len());
        prop_assert!(model.assignments.values().all(|&c| c < k));
        prop_assert_eq!(model.centroids.len(), k);
        prop_assert!(model.iterations <= 100);
    }

    #[test]
    fn inertia_never_increases_across_iterations((values, k, seed) in arb_run()) {
        let points = scalar_points(&values);
        let model = cluster_seeded(&points, &KMeansConfig::new(k).with_seed(seed)).unwrap();
        for pair in model.inertia_history.windows(2) {
            prop_assert!(pair[1] <= pair[0] + 1e-9, "{:?}", model.inertia_history);
        }
    }

    #[test]
    fn silhouette_is_bounded((values, k, seed) in arb_run()) {
        let points = scalar_points(&values);
        let model = cluster_seeded(&points, &KMeansConfig::new(k).with_seed(seed)).unwrap();
        prop_assert!((-1.0..=1.0).contains(&model.silhouette));
        prop_assert!(model.inertia >= 0.0);
    }
}
