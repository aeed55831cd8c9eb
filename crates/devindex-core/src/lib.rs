//! # devindex-core
//!
//! Foundation crate for the development index engine.
//! Defines the data model, the indicator catalog, collaborator traits,
//! errors, config, tracing, and constants. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DevIndexConfig;
pub use errors::{AnalysisError, ErrorCode, InputError};
pub use types::{
    Category, CategoryScores, CategoryWeights, ClusterModel, CompositeResult, DevelopmentTier,
    Entity, IndicatorCatalog, IndicatorDefinition, InequalityMetrics, NormalizedEntity, Polarity,
    QualityLabel,
};
