//! HTTP Client Utilities
//!
//! Shared HTTP client creation with consistent configuration.

use std::time::Duration;

use super::error::{ErrorCode, GoogleError};

/// Default request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout, in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Create a reqwest HTTP client with standard configuration
///
/// - 30 second timeout
/// - 10 second connect timeout
pub fn create_http_client() -> Result<reqwest::Client, GoogleError> {
    create_http_client_with_timeout(DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
}

/// Create a reqwest HTTP client with custom timeouts
pub fn create_http_client_with_timeout(
    timeout_secs: u64,
    connect_timeout_secs: u64,
) -> Result<reqwest::Client, GoogleError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .map_err(|e| GoogleError::new(ErrorCode::Http, format!("Failed to build HTTP client: {}", e)))
}
