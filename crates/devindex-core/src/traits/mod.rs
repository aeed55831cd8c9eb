//! Seams to external collaborators.

pub mod recommendation;

pub use recommendation::{
    BudgetEstimate, IndicatorSnapshot, Priority, Recommendation, RecommendationProvider,
    RecommendationRequest, StaticRecommendationProvider, Timeline,
};
