//! RecommendationProvider trait.
//!
//! The engine never generates narrative recommendations itself. It only
//! produces the `(region, cluster, indicator snapshot)` triple that a
//! provider consumes. A language-generation backend implements the trait
//! outside this workspace; `StaticRecommendationProvider` serves canned
//! records for offline use.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RecommendationError;
use crate::types::{CategoryScores, DevelopmentTier};

/// Indicator values and scores of one entity at analysis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub entity_id: String,
    pub entity_name: String,
    pub composite: f64,
    pub categories: CategoryScores,
    pub indicators: BTreeMap<String, f64>,
}

/// Input handed to a recommendation provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub region_id: String,
    /// 0-based k-means cluster index.
    pub cluster_index: usize,
    pub indicator_snapshot: IndicatorSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetEstimate {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// One structured policy recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub action: String,
    pub expected_result: String,
    pub timeline: Timeline,
    pub budget_estimate: BudgetEstimate,
    pub priority: Priority,
    pub category: String,
    pub success_metrics: Vec<String>,
    pub implementation_steps: Vec<String>,
    pub risk_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_practices: Vec<String>,
}

/// Black-box producer of recommendations for one entity.
pub trait RecommendationProvider: Send + Sync {
    fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendationError>;
}

/// Offline provider returning canned records keyed by threshold tier.
pub struct StaticRecommendationProvider;

impl RecommendationProvider for StaticRecommendationProvider {
    fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendationError> {
        let tier = DevelopmentTier::from_composite(request.indicator_snapshot.composite);
        Ok(canned_for(tier))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    action: &str,
    expected_result: &str,
    timeline: Timeline,
    budget_estimate: BudgetEstimate,
    priority: Priority,
    category: &str,
    success_metrics: &[&str],
    implementation_steps: &[&str],
    risk_factors: &[&str],
) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        action: action.to_string(),
        expected_result: expected_result.to_string(),
        timeline,
        budget_estimate,
        priority,
        category: category.to_string(),
        success_metrics: strings(success_metrics),
        implementation_steps: strings(implementation_steps),
        risk_factors: strings(risk_factors),
        best_practices: Vec::new(),
    }
}

fn canned_for(tier: DevelopmentTier) -> Vec<Recommendation> {
    match tier {
        DevelopmentTier::High => vec![
            record(
                "1",
                "Diversify economic base beyond primary sectors",
                "Increase GDP growth rate by 2-3% annually",
                Timeline::Medium,
                BudgetEstimate::High,
                Priority::Critical,
                "economic",
                &["GDP growth rate increase", "New industries created", "Job creation"],
                &["Conduct economic assessment", "Identify growth sectors", "Develop incentive programs"],
                &["Market competition", "Regulatory changes"],
            ),
            record(
                "2",
                "Enhance human capital through education and training",
                "Increase workforce productivity by 25%",
                Timeline::Long,
                BudgetEstimate::Medium,
                Priority::High,
                "social",
                &["Education level increase", "Skill certification rate", "Employment rate"],
                &["Needs assessment", "Curriculum development", "Teacher training"],
                &["Teacher shortage", "Student dropout"],
            ),
        ],
        DevelopmentTier::MediumHigh => vec![record(
            "1",
            "Support SME development programs",
            "Create 500+ new small businesses",
            Timeline::Short,
            BudgetEstimate::Medium,
            Priority::High,
            "economic",
            &["Business registrations", "Employment created", "Revenue generated"],
            &["Simplify registration", "Provide financing", "Business training"],
            &["Market saturation", "Low capital"],
        )],
        DevelopmentTier::MediumLow => vec![record(
            "1",
            "Focus on poverty reduction programs",
            "Reduce poverty rate by 15% over 3 years",
            Timeline::Medium,
            BudgetEstimate::High,
            Priority::Critical,
            "social",
            &["Income level increase", "Poverty rate reduction", "Living standard improvement"],
            &["Target population identification", "Cash transfer programs", "Job creation"],
            &["Inflation", "Budget constraints"],
        )],
        DevelopmentTier::Low => vec![
            record(
                "1",
                "Agriculture modernization initiative",
                "Raise agricultural productivity by 30%",
                Timeline::Medium,
                BudgetEstimate::Medium,
                Priority::Critical,
                "economic",
                &["Crop yield per hectare", "Farm income", "Irrigated area"],
                &["Soil and water survey", "Equipment leasing program", "Farmer training"],
                &["Drought", "Commodity price swings"],
            ),
            record(
                "2",
                "Invest in basic infrastructure",
                "Bring paved roads and gas supply coverage above 80%",
                Timeline::Long,
                BudgetEstimate::High,
                Priority::High,
                "infrastructure",
                &["Road completion rate", "Households connected to gas", "Transport efficiency"],
                &["Survey infrastructure gaps", "Design investment plan", "Execute construction"],
                &["Budget constraints", "Construction delays"],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(composite: f64) -> RecommendationRequest {
        RecommendationRequest {
            region_id: "TAS".to_string(),
            cluster_index: 0,
            indicator_snapshot: IndicatorSnapshot {
                entity_id: "TAS-1".to_string(),
                entity_name: "Toshkent District 1".to_string(),
                composite,
                categories: CategoryScores::default(),
                indicators: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn static_provider_returns_records_for_every_tier() {
        let provider = StaticRecommendationProvider;
        for composite in [0.9, 0.6, 0.3, 0.1] {
            let recs = provider.recommend(&request(composite)).unwrap();
            assert!(!recs.is_empty(), "no records for composite {composite}");
        }
    }

    #[test]
    fn static_provider_keys_on_threshold_tier() {
        let provider = StaticRecommendationProvider;
        let low = provider.recommend(&request(0.1)).unwrap();
        assert_eq!(low[0].action, "Agriculture modernization initiative");
        let high = provider.recommend(&request(0.8)).unwrap();
        assert_eq!(high[0].priority, Priority::Critical);
    }

    #[test]
    fn recommendation_serializes_camel_case() {
        let recs = StaticRecommendationProvider.recommend(&request(0.6)).unwrap();
        let json = serde_json::to_value(&recs[0]).unwrap();
        assert!(json.get("expectedResult").is_some());
        assert!(json.get("budgetEstimate").is_some());
        assert_eq!(json["timeline"], "short");
    }
}
