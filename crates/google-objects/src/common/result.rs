//! Common Result Type

use super::error::GoogleError;

/// Library result type
///
/// Uses GoogleError for consistent error handling across both APIs.
pub type GoogleResult<T> = Result<T, GoogleError>;
