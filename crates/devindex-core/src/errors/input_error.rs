//! Structural input validation errors.

use super::error_code::{self, ErrorCode};

/// The only failures the numeric core surfaces. Degenerate numeric input
/// (zero variance, zero mean, missing values) never lands here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("entity population is empty")]
    EmptyPopulation,

    #[error("cluster count {k} is outside [1, {population}]")]
    InvalidClusterCount { k: usize, population: usize },

    #[error("year {year} is outside [{min}, {max}]")]
    InvalidYear { year: i32, min: i32, max: i32 },

    #[error("duplicate entity id: {id}")]
    DuplicateEntity { id: String },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl ErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
