//! Errors reported by recommendation collaborators.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    #[error("recommendation provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("recommendation provider returned an invalid response: {reason}")]
    InvalidResponse { reason: String },
}

impl ErrorCode for RecommendationError {
    fn error_code(&self) -> &'static str {
        error_code::RECOMMENDATION_ERROR
    }
}
