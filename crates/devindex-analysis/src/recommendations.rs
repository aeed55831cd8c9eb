//! Provider input assembly.

use devindex_core::errors::AnalysisResult;
use devindex_core::traits::{
    IndicatorSnapshot, Recommendation, RecommendationProvider, RecommendationRequest,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::report::AnalysisReport;

/// One request per entity, carrying its k-means cluster and a snapshot of
/// its raw indicators and scores.
pub fn recommendation_requests(report: &AnalysisReport) -> Vec<RecommendationRequest> {
    report
        .entities
        .iter()
        .map(|entity| RecommendationRequest {
            region_id: report.region_id.clone(),
            cluster_index: report
                .clustering
                .assignment(&entity.id)
                .map(|a| a.cluster)
                .unwrap_or_default(),
            indicator_snapshot: IndicatorSnapshot {
                entity_id: entity.id.clone(),
                entity_name: entity.name.clone(),
                composite: entity.composite_index,
                categories: entity.categories,
                indicators: entity.indicators.clone(),
            },
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecommendations {
    pub entity_id: String,
    pub recommendations: Vec<Recommendation>,
}

/// Ask `provider` for every entity in the report. Stops at the first
/// provider failure.
pub fn recommend_all(
    report: &AnalysisReport,
    provider: &dyn RecommendationProvider,
) -> AnalysisResult<Vec<EntityRecommendations>> {
    let requests = recommendation_requests(report);
    debug!(request_count = requests.len(), "requesting recommendations");

    requests
        .iter()
        .map(|request| -> AnalysisResult<EntityRecommendations> {
            let recommendations = provider.recommend(request).map_err(|e| {
                warn!(
                    entity_id = %request.indicator_snapshot.entity_id,
                    error = %e,
                    "recommendation provider failed"
                );
                e
            })?;
            Ok(EntityRecommendations {
                entity_id: request.indicator_snapshot.entity_id.clone(),
                recommendations,
            })
        })
        .collect()
}
