//! Category aggregation: mean of a category's normalized indicators.

use devindex_core::types::{Category, CategoryScores, IndicatorCatalog, NormalizedEntity};

/// Unweighted mean of the normalized values tagged with `category`.
///
/// Indicators the entity did not measure are excluded, not counted as 0.
/// Returns 0 when no indicator in the category has a value.
pub fn category_score(
    normalized: &NormalizedEntity,
    category: Category,
    catalog: &IndicatorCatalog,
) -> f64 {
    let (sum, count) = catalog
        .in_category(category)
        .filter_map(|def| normalized.get(&def.id))
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

/// Scores for all four categories.
pub fn category_scores(normalized: &NormalizedEntity, catalog: &IndicatorCatalog) -> CategoryScores {
    let mut scores = CategoryScores::default();
    for category in Category::ALL {
        scores.set(category, category_score(normalized, category, catalog));
    }
    scores
}
