//! Common Error Types
//!
//! Unified error handling for the Sheets and Slides object layers.

use std::fmt;

/// Error categories surfaced by the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Transport failure (connect, timeout, TLS)
    Http,
    /// Google API answered with a non-success status
    Api,
    /// HTTP 429 from Google
    RateLimited,
    /// Response body was not the JSON shape we expected
    Parse,
    /// Sheet, page, element or cell missing from the local object graph
    NotFound,
    InvalidArgument,
    Credentials,
    Config,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Http => "http",
            ErrorCode::Api => "api",
            ErrorCode::RateLimited => "rate_limited",
            ErrorCode::Parse => "parse",
            ErrorCode::NotFound => "not_found",
            ErrorCode::InvalidArgument => "invalid_argument",
            ErrorCode::Credentials => "credentials",
            ErrorCode::Config => "config",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Library error type with a category code
#[derive(Debug, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct GoogleError {
    pub code: ErrorCode,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl GoogleError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Create an API error carrying the Google status code
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Api, message).with_data(serde_json::json!({ "status": status }))
    }

    pub fn rate_limited() -> Self {
        Self::new(
            ErrorCode::RateLimited,
            "Rate limited. Please try again later.",
        )
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Parse, message)
    }

    /// Create a not found error for a named kind of object
    pub fn not_found(kind: &str, key: impl fmt::Display) -> Self {
        Self::new(ErrorCode::NotFound, format!("{} not found: {}", kind, key))
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidArgument, message)
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Credentials, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    /// HTTP status reported by Google, if this is an API error
    pub fn status(&self) -> Option<u16> {
        self.data
            .as_ref()
            .and_then(|d| d.get("status"))
            .and_then(|v| v.as_u64())
            .map(|s| s as u16)
    }
}

impl From<reqwest::Error> for GoogleError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(ErrorCode::Http, format!("HTTP request failed: {}", err))
    }
}

impl From<serde_json::Error> for GoogleError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(format!("Failed to parse JSON: {}", err))
    }
}

impl From<std::io::Error> for GoogleError {
    fn from(err: std::io::Error) -> Self {
        Self::config(format!("I/O error: {}", err))
    }
}

// Convert to String (for callers that only surface messages)
impl From<GoogleError> for String {
    fn from(err: GoogleError) -> String {
        err.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = GoogleError::not_found("sheet", "Budget");
        assert_eq!(err.to_string(), "[not_found] sheet not found: Budget");
    }

    #[test]
    fn test_api_error_status() {
        let err = GoogleError::api(404, "Requested entity was not found.");
        assert_eq!(err.code, ErrorCode::Api);
        assert_eq!(err.status(), Some(404));
        assert_eq!(GoogleError::parse("x").status(), None);
    }
}
