//! Google OAuth2 Token Endpoint
//!
//! Exchanges a stored refresh token for a short-lived access token.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::common::{GoogleError, GoogleResult};

pub const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Tokens returned from a token refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthTokens {
    pub access_token: String,
    pub token_type: String,
    pub expiry: DateTime<Utc>,
    pub scopes: Vec<String>,
}

impl OAuthTokens {
    pub fn is_expired(&self) -> bool {
        self.expiry <= Utc::now()
    }
}

/// Refresh an access token using a refresh token.
pub async fn refresh_token(
    http: &reqwest::Client,
    token_endpoint: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> GoogleResult<OAuthTokens> {
    info!("Refreshing access token");

    let mut params = HashMap::new();
    params.insert("client_id", client_id);
    params.insert("client_secret", client_secret);
    params.insert("refresh_token", refresh_token);
    params.insert("grant_type", "refresh_token");

    let body = post_form(http, token_endpoint, &params).await?;
    parse_token_response(&body)
}

/// POST a form-encoded request and return the response body.
///
/// Error bodies from the token endpoint are returned too, so the caller can
/// read `error_description`.
async fn post_form(
    http: &reqwest::Client,
    url: &str,
    params: &HashMap<&str, &str>,
) -> GoogleResult<String> {
    let response = http.post(url).form(params).send().await?;
    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|e| GoogleError::credentials(format!("Failed to read token response: {}", e)))?;

    if !status.is_success() {
        error!("Token endpoint returned HTTP {}", status);
    }

    Ok(body)
}

/// Parse a Google OAuth2 token response.
fn parse_token_response(body: &str) -> GoogleResult<OAuthTokens> {
    let parsed: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| GoogleError::credentials(format!("Invalid token response: {}", e)))?;

    if let Some(err) = parsed.get("error").and_then(|v| v.as_str()) {
        let desc = parsed
            .get("error_description")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return Err(GoogleError::credentials(format!("{}: {}", err, desc)));
    }

    let access_token = parsed
        .get("access_token")
        .and_then(|v| v.as_str())
        .ok_or_else(|| GoogleError::credentials("Missing access_token in response"))?
        .to_string();

    let token_type = parsed
        .get("token_type")
        .and_then(|v| v.as_str())
        .unwrap_or("Bearer")
        .to_string();

    let expires_in = parsed
        .get("expires_in")
        .and_then(|v| v.as_i64())
        .unwrap_or(3600);

    let expiry = Utc::now() + chrono::Duration::seconds(expires_in);

    let scopes = parsed
        .get("scope")
        .and_then(|v| v.as_str())
        .map(|s| s.split(' ').map(String::from).collect())
        .unwrap_or_default();

    Ok(OAuthTokens {
        access_token,
        token_type,
        expiry,
        scopes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response_success() {
        let body = r#"{
            "access_token": "ya29.test",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "https://www.googleapis.com/auth/spreadsheets https://www.googleapis.com/auth/presentations"
        }"#;

        let tokens = parse_token_response(body).unwrap();
        assert_eq!(tokens.access_token, "ya29.test");
        assert_eq!(tokens.scopes.len(), 2);
        assert!(!tokens.is_expired());
    }

    #[test]
    fn test_parse_token_response_defaults() {
        let tokens = parse_token_response(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(tokens.token_type, "Bearer");
        assert!(tokens.scopes.is_empty());
    }

    #[test]
    fn test_parse_token_response_error() {
        let body = r#"{"error": "invalid_grant", "error_description": "Token has been revoked"}"#;
        let err = parse_token_response(body).unwrap_err();
        assert!(err.message.contains("Token has been revoked"));
    }

    #[test]
    fn test_expired_token() {
        let tokens = OAuthTokens {
            access_token: "old".to_string(),
            token_type: "Bearer".to_string(),
            expiry: Utc::now() - chrono::Duration::seconds(1),
            scopes: vec![],
        };
        assert!(tokens.is_expired());
    }
}
