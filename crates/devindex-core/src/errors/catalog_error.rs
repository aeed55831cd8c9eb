//! Indicator catalog errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown indicator category: {0}")]
    UnknownCategory(String),

    #[error("unknown indicator polarity: {0}")]
    UnknownPolarity(String),

    #[error("duplicate indicator id in catalog: {id}")]
    DuplicateIndicator { id: String },

    #[error("indicator {id} has invalid weight {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
