use serde::{Deserialize, Serialize};

use super::entity::NormalizedEntity;
use super::indicator::Category;

/// One score per category, each the mean of that category's normalized
/// indicators (0 when none contributed).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    pub economic: f64,
    pub social: f64,
    pub demographic: f64,
    pub infrastructure: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Economic => self.economic,
            Category::Social => self.social,
            Category::Demographic => self.demographic,
            Category::Infrastructure => self.infrastructure,
        }
    }

    pub fn set(&mut self, category: Category, score: f64) {
        match category {
            Category::Economic => self.economic = score,
            Category::Social => self.social = score,
            Category::Demographic => self.demographic = score,
            Category::Infrastructure => self.infrastructure = score,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Composite development score for one entity plus the breakdown that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeResult {
    pub entity_id: String,
    /// Weighted mean of category scores, clamped to [0, 1].
    pub composite: f64,
    pub categories: CategoryScores,
    /// The normalized indicator values the category scores came from.
    pub normalized: NormalizedEntity,
}
