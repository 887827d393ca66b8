//! Google API Authenticated HTTP Client
//!
//! Injects the bearer token and maps Google API error responses.

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::auth::Credentials;
use crate::common::{create_http_client, create_http_client_with_timeout, GoogleError, GoogleResult};
use crate::config::Config;

/// Google API HTTP client with OAuth token injection
#[derive(Clone)]
pub struct GoogleClient {
    client: Client,
    access_token: String,
}

impl std::fmt::Debug for GoogleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleClient").finish_non_exhaustive()
    }
}

impl GoogleClient {
    /// Create a new Google API client with an OAuth access token
    pub fn new(access_token: impl Into<String>) -> GoogleResult<Self> {
        Ok(Self {
            client: create_http_client()?,
            access_token: access_token.into(),
        })
    }

    /// Create a client using the timeouts from `config`
    pub fn with_config(access_token: impl Into<String>, config: &Config) -> GoogleResult<Self> {
        Ok(Self {
            client: create_http_client_with_timeout(
                config.timeout_secs,
                config.connect_timeout_secs,
            )?,
            access_token: access_token.into(),
        })
    }

    /// Resolve `credentials` to a token and build a client
    pub async fn from_credentials(credentials: &Credentials, config: &Config) -> GoogleResult<Self> {
        let http = create_http_client_with_timeout(config.timeout_secs, config.connect_timeout_secs)?;
        let access_token = credentials.access_token(&http).await?;
        Ok(Self {
            client: http,
            access_token,
        })
    }

    /// Make an authenticated GET request
    pub async fn get(&self, url: &str, query: &[(&str, String)]) -> GoogleResult<Value> {
        let builder = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token);

        self.execute_request(builder).await
    }

    /// Make an authenticated POST request with JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> GoogleResult<Value> {
        let builder = self
            .client
            .post(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .json(body);

        self.execute_request(builder).await
    }

    /// Make an authenticated PUT request with JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> GoogleResult<Value> {
        let builder = self
            .client
            .put(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .json(body);

        self.execute_request(builder).await
    }

    /// Execute a request and handle Google API response patterns
    async fn execute_request(&self, builder: RequestBuilder) -> GoogleResult<Value> {
        debug!("Executing Google API request");

        let response = builder.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate limited by Google API");
            return Err(GoogleError::rate_limited());
        }

        let body = response
            .text()
            .await
            .map_err(|e| GoogleError::parse(format!("Failed to read response body: {}", e)))?;

        // Empty successful responses
        if status.is_success() && body.is_empty() {
            return Ok(Value::Object(serde_json::Map::new()));
        }

        let parsed: Value = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Err(GoogleError::parse(format!(
                    "Failed to parse JSON response: {} (body: {})",
                    e, body
                )));
            }
            Err(_) => Value::Null,
        };

        if !status.is_success() {
            let error_msg = extract_error_message(&parsed, status);
            error!("Google API error: {}", error_msg);
            return Err(GoogleError::api(status.as_u16(), error_msg));
        }

        Ok(parsed)
    }
}

/// Extract error message from Google API error response
fn extract_error_message(response: &Value, status: StatusCode) -> String {
    // {"error": {"code": 400, "message": "Invalid request", "status": "INVALID_ARGUMENT"}}
    if let Some(error_obj) = response.get("error") {
        if let Some(message) = error_obj.get("message").and_then(|v| v.as_str()) {
            let code = error_obj
                .get("code")
                .and_then(|v| v.as_i64())
                .unwrap_or(status.as_u16() as i64);

            return format!("Google API error {}: {}", code, message);
        }
    }

    format!("HTTP {} error", status)
}
