//! Data model shared by every stage of the engine.
//! All values are transient and request-scoped.

pub mod catalog;
pub mod cluster;
pub mod entity;
pub mod indicator;
pub mod inequality;
pub mod scores;
pub mod tier;
pub mod weights;

pub use catalog::IndicatorCatalog;
pub use cluster::{ClusterModel, QualityLabel};
pub use entity::{Entity, NormalizedEntity};
pub use indicator::{Category, IndicatorDefinition, Polarity};
pub use inequality::InequalityMetrics;
pub use scores::{CategoryScores, CompositeResult};
pub use tier::DevelopmentTier;
pub use weights::CategoryWeights;
