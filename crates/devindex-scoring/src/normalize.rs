//! Min-max normalization relative to an entity population.

use std::collections::HashMap;

use devindex_core::types::{Entity, IndicatorCatalog, NormalizedEntity, Polarity};

/// Observed bounds of one indicator across a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorRange {
    pub min: f64,
    pub max: f64,
}

impl IndicatorRange {
    /// No discriminating signal when every observation is equal.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// `(value - min) / (max - min)`, or 0 when `max == min`.
pub fn min_max(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min)
}

/// Per-indicator ranges computed once for a population.
///
/// Indicators no entity measured have no range.
#[derive(Debug, Clone, Default)]
pub struct PopulationRanges {
    ranges: HashMap<String, IndicatorRange>,
}

impl PopulationRanges {
    pub fn compute(population: &[Entity], catalog: &IndicatorCatalog) -> Self {
        let mut ranges = HashMap::with_capacity(catalog.len());
        for def in catalog.iter() {
            let mut observed = population.iter().filter_map(|e| e.indicator(&def.id));
            let Some(first) = observed.next() else {
                continue;
            };
            let range = observed.fold(
                IndicatorRange {
                    min: first,
                    max: first,
                },
                |acc, v| IndicatorRange {
                    min: acc.min.min(v),
                    max: acc.max.max(v),
                },
            );
            ranges.insert(def.id.clone(), range);
        }
        Self { ranges }
    }

    pub fn get(&self, indicator_id: &str) -> Option<IndicatorRange> {
        self.ranges.get(indicator_id).copied()
    }

    /// Normalize one entity against these ranges.
    ///
    /// Only indicators the entity measured appear in the output. A measured
    /// indicator with no population range, or a degenerate one, maps to 0.
    pub fn normalize(&self, entity: &Entity, catalog: &IndicatorCatalog) -> NormalizedEntity {
        let mut normalized = NormalizedEntity::new(entity.id.clone());
        for def in catalog.iter() {
            let Some(value) = entity.indicator(&def.id) else {
                continue;
            };
            let scaled = match self.get(&def.id) {
                None => 0.0,
                Some(range) if range.is_degenerate() => 0.0,
                Some(range) => {
                    let scaled = min_max(value, range.min, range.max);
                    match def.polarity {
                        Polarity::LowerIsBetter => 1.0 - scaled,
                        Polarity::HigherIsBetter | Polarity::Neutral => scaled,
                    }
                }
            };
            normalized
                .values
                .insert(def.id.clone(), scaled.clamp(0.0, 1.0));
        }
        normalized
    }
}

/// Normalize `entity` relative to `population`.
///
/// Ranges are recomputed on every call; use [`PopulationRanges`] directly
/// when normalizing many entities against the same population.
pub fn normalize(
    entity: &Entity,
    population: &[Entity],
    catalog: &IndicatorCatalog,
) -> NormalizedEntity {
    PopulationRanges::compute(population, catalog).normalize(entity, catalog)
}
