//! Category weight table for composite aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::indicator::Category;
use crate::constants::{
    DEFAULT_WEIGHT_DEMOGRAPHIC, DEFAULT_WEIGHT_ECONOMIC, DEFAULT_WEIGHT_INFRASTRUCTURE,
    DEFAULT_WEIGHT_SOCIAL,
};

/// Closed map from category to a finite non-negative weight.
///
/// Categories absent from the table take no part in the composite: neither
/// their score nor a weight enters the weighted mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryWeights {
    weights: BTreeMap<Category, f64>,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::static_defaults()
    }
}

impl CategoryWeights {
    /// Economic 0.30, social 0.25, demographic 0.15, infrastructure 0.30.
    pub fn static_defaults() -> Self {
        let mut weights = BTreeMap::new();
        weights.insert(Category::Economic, DEFAULT_WEIGHT_ECONOMIC);
        weights.insert(Category::Social, DEFAULT_WEIGHT_SOCIAL);
        weights.insert(Category::Demographic, DEFAULT_WEIGHT_DEMOGRAPHIC);
        weights.insert(Category::Infrastructure, DEFAULT_WEIGHT_INFRASTRUCTURE);
        Self { weights }
    }

    /// A table with no categories defined.
    pub fn empty() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Same weight for every category.
    pub fn uniform(weight: f64) -> Self {
        let mut table = Self::empty();
        for category in Category::ALL {
            table.set(category, weight);
        }
        table
    }

    pub fn set(&mut self, category: Category, weight: f64) {
        self.weights.insert(category, weight);
    }

    pub fn with(mut self, category: Category, weight: f64) -> Self {
        self.set(category, weight);
        self
    }

    pub fn remove(&mut self, category: Category) {
        self.weights.remove(&category);
    }

    /// Weight for a category, or `None` when undefined.
    ///
    /// A stored weight that is not a finite non-negative number counts as
    /// undefined, so the category drops out of the composite.
    pub fn get(&self, category: Category) -> Option<f64> {
        self.weights
            .get(&category)
            .copied()
            .filter(|w| w.is_finite() && *w >= 0.0)
    }

    /// Sum of the weights of every defined category.
    pub fn total(&self) -> f64 {
        Category::ALL.iter().filter_map(|&c| self.get(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(move |c| self.get(c).map(|w| (c, w)))
    }
}
