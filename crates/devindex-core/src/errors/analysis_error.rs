//! Top-level error for the analysis service.

use super::error_code::ErrorCode;
use super::{CatalogError, ConfigError, InputError, RecommendationError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),
}

impl ErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Input(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Recommendation(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
