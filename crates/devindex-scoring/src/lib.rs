//! # devindex-scoring
//!
//! Raw indicators → normalized [0, 1] values → category scores →
//! weighted composite index. Every stage is a pure function of the
//! population it is given; normalization is always relative to that
//! population, never to a historical baseline.

pub mod aggregate;
pub mod composite;
pub mod normalize;
pub mod ranking;

pub use aggregate::{category_score, category_scores};
pub use composite::{composite_index, weighted_composite, ScoringEngine};
pub use normalize::{min_max, normalize, IndicatorRange, PopulationRanges};
pub use ranking::{rank_by_composite, RankedEntry};
