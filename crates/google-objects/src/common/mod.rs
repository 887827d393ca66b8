//! Common Utilities
//!
//! Shared types, error handling, and utility functions used across the crate.

pub mod error;
pub mod http;
pub mod paths;
pub mod result;

pub use error::{ErrorCode, GoogleError};
pub use http::{create_http_client, create_http_client_with_timeout};
pub use paths::{config_path, default_credentials_path, google_objects_dir};
pub use result::GoogleResult;
