//! ErrorCode trait for the wrapping service boundary.

/// Every error enum implements this to give the wrapping layer a stable
/// code string it can turn into a user-facing validation message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const RECOMMENDATION_ERROR: &str = "RECOMMENDATION_ERROR";
