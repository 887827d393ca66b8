//! Google API Client Module
//!
//! Authenticated HTTP access plus the batch-update queue shared by the Sheets
//! and Slides object layers.

pub mod batch;
pub mod client;

pub use batch::{BatchUpdate, BatchUpdateRequest, BatchUpdateResponse, UpdateQueue};
pub use client::GoogleClient;

/// Macro to implement the standard Google API wrapper constructor pattern.
/// Each API struct wraps a `GoogleClient` plus the base URL it talks to.
macro_rules! google_api_wrapper {
    ($name:ident, $base:expr, $config_field:ident) => {
        impl $name {
            /// Create a new API wrapper against the public Google endpoint
            pub fn new(client: crate::google::GoogleClient) -> Self {
                Self::with_base_url(client, $base)
            }

            /// Create a new API wrapper against a custom endpoint
            pub fn with_base_url(
                client: crate::google::GoogleClient,
                base_url: impl Into<String>,
            ) -> Self {
                let base_url: String = base_url.into();
                Self {
                    client,
                    base_url: base_url.trim_end_matches('/').to_string(),
                }
            }

            /// Create a new API wrapper using the endpoint from `config`
            pub fn from_config(
                client: crate::google::GoogleClient,
                config: &crate::config::Config,
            ) -> Self {
                Self::with_base_url(client, config.$config_field.as_str())
            }

            pub fn base_url(&self) -> &str {
                &self.base_url
            }
        }
    };
}

pub(crate) use google_api_wrapper;
