use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One geographic entity (district or region) with its raw measurements.
///
/// Keys in `indicators` need not cover the catalog. Arbitrary extra fields
/// from upstream records live in `extensions` and are never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "regionId")]
    pub region: String,
    #[serde(default)]
    pub population: f64,
    #[serde(default)]
    pub indicators: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, serde_json::Value>,
}

impl Entity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            region: region.into(),
            population: 0.0,
            indicators: BTreeMap::new(),
            extensions: BTreeMap::new(),
        }
    }

    pub fn with_indicator(mut self, id: impl Into<String>, value: f64) -> Self {
        self.indicators.insert(id.into(), value);
        self
    }

    pub fn with_population(mut self, population: f64) -> Self {
        self.population = population;
        self
    }

    /// Raw measurement, or `None` when absent or not a finite number.
    pub fn indicator(&self, id: &str) -> Option<f64> {
        self.indicators.get(id).copied().filter(|v| v.is_finite())
    }
}

/// Population-relative normalized values for one entity.
///
/// Only indicators the entity actually measured are present; every
/// present value lies in [0, 1].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedEntity {
    pub id: String,
    pub values: BTreeMap<String, f64>,
}

impl NormalizedEntity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: BTreeMap::new(),
        }
    }

    /// Normalized value if the entity measured this indicator.
    pub fn get(&self, indicator_id: &str) -> Option<f64> {
        self.values.get(indicator_id).copied()
    }

    /// Normalized value with absent indicators reading as 0.
    pub fn value_or_zero(&self, indicator_id: &str) -> f64 {
        self.get(indicator_id).unwrap_or(0.0)
    }
}
