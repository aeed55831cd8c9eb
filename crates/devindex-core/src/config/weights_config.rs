//! Category weight configuration.

use serde::{Deserialize, Serialize};

use crate::types::{Category, CategoryWeights};

/// Per-category weight overrides. Unset categories keep the static default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct WeightsConfig {
    pub economic: Option<f64>,
    pub social: Option<f64>,
    pub demographic: Option<f64>,
    pub infrastructure: Option<f64>,
}

impl WeightsConfig {
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Economic => self.economic,
            Category::Social => self.social,
            Category::Demographic => self.demographic,
            Category::Infrastructure => self.infrastructure,
        }
    }

    pub fn set(&mut self, category: Category, weight: Option<f64>) {
        match category {
            Category::Economic => self.economic = weight,
            Category::Social => self.social = weight,
            Category::Demographic => self.demographic = weight,
            Category::Infrastructure => self.infrastructure = weight,
        }
    }

    /// Weight table with overrides applied on top of the static defaults.
    pub fn effective_weights(&self) -> CategoryWeights {
        let mut table = CategoryWeights::static_defaults();
        for category in Category::ALL {
            if let Some(weight) = self.get(category) {
                table.set(category, weight);
            }
        }
        table
    }
}
