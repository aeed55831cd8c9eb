use devindex_analysis::*;
use devindex_core::config::DevIndexConfig;
use devindex_core::errors::{AnalysisError, ErrorCode, RecommendationError};
use devindex_core::traits::{
    Recommendation, RecommendationProvider, RecommendationRequest, StaticRecommendationProvider,
};
use devindex_core::types::{DevelopmentTier, Entity, IndicatorCatalog};
use devindex_fixtures::{sample_districts, score_catalog, separated_population, synthetic_districts};

fn seeded(seed: u64) -> AnalysisEngine {
    let mut config = DevIndexConfig::default();
    config.clustering.seed = Some(seed);
    AnalysisEngine::new(config, IndicatorCatalog::standard())
}

#[test]
fn full_report_on_sample_districts() {
    let districts = sample_districts();
    let report = seeded(7)
        .analyze(&AnalysisRequest::new(districts.clone(), 2024).with_region("UZ"))
        .unwrap();

    assert_eq!(report.year, 2024);
    assert_eq!(report.region_id, "UZ");
    assert_eq!(report.entities.len(), districts.len());
    assert_eq!(report.ranking.len(), districts.len());
    assert_eq!(report.summary.total_entities, districts.len());
    assert_eq!(report.clustering.k, 4);
    assert_eq!(report.clustering.assignments.len(), districts.len());
    assert_eq!(report.tier_counts().iter().sum::<usize>(), districts.len());

    // Twelve observations are enough for a decile ratio.
    assert!(report.inequality.decile_ratio >= 1.0 || report.inequality.decile_ratio == 0.0);
    assert!(report.inequality.gini >= 0.0 && report.inequality.gini < 1.0);

    for (entity, input) in report.entities.iter().zip(&districts) {
        assert_eq!(entity.id, input.id);
        assert_eq!(entity.tier, DevelopmentTier::from_composite(entity.composite_index));
    }

    let top = &report.ranking[0];
    assert!((report.summary.max - top.composite).abs() < 1e-12);
}

#[test]
fn separated_population_clusters_cleanly() {
    let config = {
        let mut c = DevIndexConfig::default();
        c.clustering.seed = Some(3);
        c
    };
    let engine = AnalysisEngine::new(config, score_catalog());
    let report = engine
        .cluster(&ClusteringRequest::new(separated_population()).with_cluster_count(2))
        .unwrap();

    assert_eq!(report.k, 2);
    assert!(report.silhouette_score > 0.5);
    let low = report.assignment("low-1").unwrap().cluster;
    let high = report.assignment("high-1").unwrap().cluster;
    assert_ne!(low, high);
    assert_eq!(report.clusters[low].count, 3);
    assert_eq!(report.clusters[high].count, 3);
    assert!(report.clusters[high].min_index > report.clusters[low].max_index);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut districts = sample_districts();
    districts.push(districts[0].clone());
    let err = seeded(1)
        .analyze(&AnalysisRequest::new(districts, 2024))
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(err.to_string().contains("duplicate entity id"));
}

#[test]
fn report_serializes_camel_case() {
    let report = seeded(2)
        .analyze(&AnalysisRequest::new(sample_districts(), 2023))
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("regionId").is_some());
    assert!(json.get("generatedAt").is_some());
    assert!(json["clustering"].get("silhouetteScore").is_some());
    assert!(json["entities"][0].get("compositeIndex").is_some());
    assert_eq!(json["entities"][0]["tier"].as_u64().map(|t| (1..=4).contains(&t)), Some(true));
}

#[test]
fn request_parses_from_json() {
    let json = r#"{
        "data": [
            {"id": "a", "name": "A", "regionId": "R", "indicators": {"gdp_per_capita": 10.0}},
            {"id": "b", "name": "B", "regionId": "R", "indicators": {"gdp_per_capita": 20.0}}
        ],
        "year": 2024
    }"#;
    let request: AnalysisRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.entities.len(), 2);
    assert!(request.region_id.is_none());
    let report = seeded(4).analyze(&request).unwrap();
    assert_eq!(report.entity("b").unwrap().composite_index, report.summary.max);
}

#[test]
fn year_over_year_comparison() {
    let engine = seeded(5);
    let previous = engine
        .analyze(&AnalysisRequest::new(synthetic_districts(20, 1), 2023))
        .unwrap();
    let current = engine
        .analyze(&AnalysisRequest::new(synthetic_districts(20, 2), 2024))
        .unwrap();

    let cmp = compare_years(&previous, &current);
    assert_eq!(cmp.changes.len(), 20);
    assert!(cmp.added.is_empty() && cmp.removed.is_empty());
    for change in &cmp.changes {
        let expected = change.current_composite - change.previous_composite;
        assert!((change.composite_index_change - expected).abs() < 1e-12);
        assert_eq!(
            change.cluster_change,
            change.current_tier.number() as i8 - change.previous_tier.number() as i8
        );
    }
}

#[test]
fn recommendation_requests_carry_snapshot() {
    let report = seeded(6)
        .analyze(&AnalysisRequest::new(sample_districts(), 2024).with_region("TAS"))
        .unwrap();
    let requests = recommendation_requests(&report);
    assert_eq!(requests.len(), report.entities.len());
    for (request, entity) in requests.iter().zip(&report.entities) {
        assert_eq!(request.region_id, "TAS");
        assert_eq!(request.indicator_snapshot.entity_id, entity.id);
        assert_eq!(request.indicator_snapshot.indicators, entity.indicators);
        assert_eq!(
            Some(request.cluster_index),
            report.clustering.assignment(&entity.id).map(|a| a.cluster)
        );
    }

    let all = recommend_all(&report, &StaticRecommendationProvider).unwrap();
    assert_eq!(all.len(), report.entities.len());
    assert!(all.iter().all(|r| !r.recommendations.is_empty()));
}

struct Failing;

impl RecommendationProvider for Failing {
    fn recommend(
        &self,
        _request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        Err(RecommendationError::Unavailable {
            reason: "offline".into(),
        })
    }
}

#[test]
fn provider_failure_propagates() {
    let report = seeded(6)
        .analyze(&AnalysisRequest::new(sample_districts(), 2024))
        .unwrap();
    let err = recommend_all(&report, &Failing).unwrap_err();
    assert!(matches!(err, AnalysisError::Recommendation(_)));
}

#[test]
fn single_entity_population() {
    let report = seeded(8)
        .analyze(&AnalysisRequest::new(
            vec![Entity::new("solo", "Solo", "R").with_indicator("literacy_rate", 99.0)],
            2024,
        ))
        .unwrap();
    assert_eq!(report.clustering.k, 1);
    // Degenerate range: every normalized value is 0.
    assert_eq!(report.entities[0].composite_index, 0.0);
    assert_eq!(report.inequality.gini, 0.0);
    assert_eq!(report.ranking[0].percentile, 100.0);
}
