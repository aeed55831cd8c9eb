use devindex_inequality::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn gini_bounded_for_non_negative(values in prop::collection::vec(0.0f64..1.0, 1..200)) {
        let g = gini(&values);
        prop_assert!(g >= -1e-12 && g < 1.0, "gini = {}", g);
    }

    #[test]
    fn metrics_are_scale_invariant(
        values in prop::collection::vec(0.01f64..1.0, 10..100),
        scale in 0.5f64..20.0,
    ) {
        let scaled: Vec<f64> = values.iter().map(|v| v * scale).collect();
        let a = inequality(&values);
        let b = inequality(&scaled);
        prop_assert!((a.gini - b.gini).abs() < 1e-9);
        prop_assert!((a.cv - b.cv).abs() < 1e-6);
        prop_assert!((a.theil - b.theil).abs() < 1e-9);
        prop_assert!((a.decile_ratio - b.decile_ratio).abs() < 1e-6);
    }

    #[test]
    fn theil_non_negative_for_positive_values(values in prop::collection::vec(0.01f64..1.0, 1..100)) {
        prop_assert!(theil(&values) > -1e-12);
    }

    #[test]
    fn percentile_within_observed_range(
        values in prop::collection::vec(-100.0f64..100.0, 1..50),
        p in 0.0f64..=100.0,
    ) {
        let q = percentile(&values, p);
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(q >= min - 1e-9 && q <= max + 1e-9);
    }

    #[test]
    fn order_of_input_does_not_matter(mut values in prop::collection::vec(0.0f64..1.0, 1..60)) {
        let before = inequality(&values);
        values.reverse();
        let after = inequality(&values);
        prop_assert!((before.gini - after.gini).abs() < 1e-9);
        prop_assert_eq!(before.decile_ratio, after.decile_ratio);
    }
}
