//! Weighted composite development index.

use devindex_core::types::{
    CategoryScores, CategoryWeights, CompositeResult, Entity, IndicatorCatalog,
};
use tracing::debug;

use crate::aggregate::category_scores;
use crate::normalize::PopulationRanges;

/// `Σ(score_c × weight_c) / Σ(weight_c)` over categories with a defined
/// weight, clamped to [0, 1]. Returns 0 when the total weight is 0.
pub fn weighted_composite(scores: &CategoryScores, weights: &CategoryWeights) -> f64 {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for (category, weight) in weights.iter() {
        weighted_sum += scores.get(category) * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return 0.0;
    }
    let composite = weighted_sum / total_weight;
    if composite.is_nan() {
        return 0.0;
    }
    composite.clamp(0.0, 1.0)
}

/// Composite index of `entity` relative to `population`.
///
/// The same entity can score differently against a different population.
pub fn composite_index(
    entity: &Entity,
    population: &[Entity],
    catalog: &IndicatorCatalog,
    weights: &CategoryWeights,
) -> CompositeResult {
    let ranges = PopulationRanges::compute(population, catalog);
    score_with_ranges(entity, &ranges, catalog, weights)
}

fn score_with_ranges(
    entity: &Entity,
    ranges: &PopulationRanges,
    catalog: &IndicatorCatalog,
    weights: &CategoryWeights,
) -> CompositeResult {
    let normalized = ranges.normalize(entity, catalog);
    let categories = category_scores(&normalized, catalog);
    let composite = weighted_composite(&categories, weights);
    CompositeResult {
        entity_id: entity.id.clone(),
        composite,
        categories,
        normalized,
    }
}

/// Scores entities against a shared catalog and weight table.
///
/// Holds only immutable references, so one engine can serve parallel
/// callers.
#[derive(Debug, Clone)]
pub struct ScoringEngine<'a> {
    catalog: &'a IndicatorCatalog,
    weights: CategoryWeights,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a IndicatorCatalog, weights: CategoryWeights) -> Self {
        Self { catalog, weights }
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        self.catalog
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Ranges for `population`, to be reused across `score_with_ranges` calls.
    pub fn ranges(&self, population: &[Entity]) -> PopulationRanges {
        PopulationRanges::compute(population, self.catalog)
    }

    pub fn score(&self, entity: &Entity, population: &[Entity]) -> CompositeResult {
        composite_index(entity, population, self.catalog, &self.weights)
    }

    pub fn score_with_ranges(&self, entity: &Entity, ranges: &PopulationRanges) -> CompositeResult {
        score_with_ranges(entity, ranges, self.catalog, &self.weights)
    }

    /// Score every entity of `population` against the population itself.
    pub fn score_population(&self, population: &[Entity]) -> Vec<CompositeResult> {
        let ranges = self.ranges(population);
        debug!(
            entity_count = population.len(),
            indicator_count = self.catalog.len(),
            "scoring population"
        );
        population
            .iter()
            .map(|entity| self.score_with_ranges(entity, &ranges))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use devindex_core::types::{Category, IndicatorDefinition, Polarity};

    use super::*;

    fn scores(e: f64, s: f64, d: f64, i: f64) -> CategoryScores {
        CategoryScores {
            economic: e,
            social: s,
            demographic: d,
            infrastructure: i,
        }
    }

    #[test]
    fn default_weights_blend_categories() {
        let c = weighted_composite(&scores(1.0, 0.0, 0.0, 0.0), &CategoryWeights::default());
        assert!((c - 0.30).abs() < 1e-12);
        let c = weighted_composite(&scores(0.5, 0.5, 0.5, 0.5), &CategoryWeights::default());
        assert!((c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weights_are_renormalized() {
        let weights = CategoryWeights::uniform(2.0);
        let c = weighted_composite(&scores(1.0, 0.0, 1.0, 0.0), &weights);
        assert!((c - 0.5).abs() < 1e-12);
    }

    #[test]
    fn undefined_categories_are_left_out() {
        let weights = CategoryWeights::empty().with(Category::Social, 1.0);
        let c = weighted_composite(&scores(0.0, 0.8, 0.0, 0.0), &weights);
        assert!((c - 0.8).abs() < 1e-12);
    }

    #[test]
    fn zero_total_weight_gives_zero() {
        assert_eq!(
            weighted_composite(&scores(1.0, 1.0, 1.0, 1.0), &CategoryWeights::uniform(0.0)),
            0.0
        );
        assert_eq!(
            weighted_composite(&scores(1.0, 1.0, 1.0, 1.0), &CategoryWeights::empty()),
            0.0
        );
    }

    #[test]
    fn composite_is_population_relative() {
        let catalog = IndicatorCatalog::new(vec![IndicatorDefinition::new(
            "income",
            Category::Economic,
            Polarity::HigherIsBetter,
        )])
        .unwrap();
        let weights = CategoryWeights::empty().with(Category::Economic, 1.0);
        let target = Entity::new("t", "T", "R").with_indicator("income", 50.0);
        let poorer = vec![
            target.clone(),
            Entity::new("p", "P", "R").with_indicator("income", 0.0),
        ];
        let richer = vec![
            target.clone(),
            Entity::new("q", "Q", "R").with_indicator("income", 100.0),
        ];
        let a = composite_index(&target, &poorer, &catalog, &weights);
        let b = composite_index(&target, &richer, &catalog, &weights);
        assert_eq!(a.composite, 1.0);
        assert_eq!(b.composite, 0.0);
    }

    #[test]
    fn engine_population_scoring_matches_single_calls() {
        let catalog = IndicatorCatalog::standard();
        let population = vec![
            Entity::new("a", "A", "R")
                .with_indicator("gdp_per_capita", 10.0)
                .with_indicator("literacy_rate", 99.0),
            Entity::new("b", "B", "R")
                .with_indicator("gdp_per_capita", 30.0)
                .with_indicator("literacy_rate", 95.0),
        ];
        let engine = ScoringEngine::new(&catalog, CategoryWeights::default());
        let batch = engine.score_population(&population);
        for (entity, result) in population.iter().zip(&batch) {
            assert_eq!(result, &engine.score(entity, &population));
        }
    }
}
