//! Error handling for the development index engine.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod recommendation_error;

pub use analysis_error::{AnalysisError, AnalysisResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use input_error::InputError;
pub use recommendation_error::RecommendationError;
