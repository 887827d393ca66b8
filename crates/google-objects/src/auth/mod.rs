//! Credential Discovery
//!
//! Locates a credentials file and turns it into a bearer token for
//! [`GoogleClient`](crate::google::GoogleClient).

pub mod google;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::common::{default_credentials_path, GoogleError, GoogleResult};
use crate::config::{Config, CREDENTIALS_ENV};

pub use google::{OAuthTokens, TOKEN_ENDPOINT};

/// Standard Application Default Credentials variable
pub const APPLICATION_CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Credentials accepted by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A ready-made bearer token
    AccessToken { access_token: String },
    /// gcloud `authorized_user` credentials, refreshed on demand
    AuthorizedUser {
        client_id: String,
        client_secret: String,
        refresh_token: String,
    },
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(rename = "type")]
    kind: Option<String>,
    access_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    refresh_token: Option<String>,
}

fn required(value: Option<String>, field: &str) -> GoogleResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| GoogleError::credentials(format!("Missing required field: {}", field)))
}

impl Credentials {
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Credentials::AccessToken {
            access_token: access_token.into(),
        }
    }

    /// Parse a credentials JSON document
    pub fn from_json(content: &str) -> GoogleResult<Self> {
        let file: CredentialsFile = serde_json::from_str(content)
            .map_err(|e| GoogleError::credentials(format!("Invalid credentials file: {}", e)))?;

        match file.kind.as_deref() {
            Some("authorized_user") => Ok(Credentials::AuthorizedUser {
                client_id: required(file.client_id, "client_id")?,
                client_secret: required(file.client_secret, "client_secret")?,
                refresh_token: required(file.refresh_token, "refresh_token")?,
            }),
            Some("service_account") => Err(GoogleError::credentials(
                "service_account credentials are not supported; use authorized_user credentials or an access token",
            )),
            Some(other) => Err(GoogleError::credentials(format!(
                "Unsupported credentials type: {}",
                other
            ))),
            None => Ok(Credentials::AccessToken {
                access_token: required(file.access_token, "access_token")?,
            }),
        }
    }

    /// Read and parse a credentials file
    pub fn from_file(path: &Path) -> GoogleResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GoogleError::credentials(format!("Failed to read credentials {:?}: {}", path, e))
        })?;
        Self::from_json(&content)
    }

    /// Resolve a bearer token, refreshing against Google when needed
    pub async fn access_token(&self, http: &reqwest::Client) -> GoogleResult<String> {
        self.access_token_from(http, TOKEN_ENDPOINT).await
    }

    /// Same as [`Credentials::access_token`] with an explicit token endpoint
    pub async fn access_token_from(
        &self,
        http: &reqwest::Client,
        token_endpoint: &str,
    ) -> GoogleResult<String> {
        match self {
            Credentials::AccessToken { access_token } => Ok(access_token.clone()),
            Credentials::AuthorizedUser {
                client_id,
                client_secret,
                refresh_token,
            } => {
                let tokens = google::refresh_token(
                    http,
                    token_endpoint,
                    client_id,
                    client_secret,
                    refresh_token,
                )
                .await?;
                debug!("Access token valid until {}", tokens.expiry);
                Ok(tokens.access_token)
            }
        }
    }
}

/// Candidate credential locations, in lookup order
pub fn credential_candidates(config: &Config) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = std::env::var(CREDENTIALS_ENV) {
        candidates.push(PathBuf::from(path));
    }
    if let Some(path) = &config.credentials {
        candidates.push(path.clone());
    }
    if let Ok(path) = std::env::var(APPLICATION_CREDENTIALS_ENV) {
        candidates.push(PathBuf::from(path));
    }
    if let Ok(path) = default_credentials_path() {
        candidates.push(path);
    }

    candidates
}

/// First candidate that exists on disk
pub fn first_existing(candidates: &[PathBuf]) -> GoogleResult<PathBuf> {
    candidates
        .iter()
        .find(|path| path.is_file())
        .cloned()
        .ok_or_else(|| {
            GoogleError::credentials(format!(
                "No credentials found (searched: {})",
                candidates
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

/// Locate and parse the credentials file
pub fn find_credentials(config: &Config) -> GoogleResult<Credentials> {
    let path = first_existing(&credential_candidates(config))?;
    info!("Using credentials from {}", path.display());
    Credentials::from_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_authorized_user() {
        let creds = Credentials::from_json(
            r#"{"type": "authorized_user", "client_id": "id", "client_secret": "secret", "refresh_token": "1//r"}"#,
        )
        .unwrap();
        assert_eq!(
            creds,
            Credentials::AuthorizedUser {
                client_id: "id".to_string(),
                client_secret: "secret".to_string(),
                refresh_token: "1//r".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_access_token() {
        let creds = Credentials::from_json(r#"{"access_token": "ya29.abc"}"#).unwrap();
        assert_eq!(creds, Credentials::from_token("ya29.abc"));
    }

    #[test]
    fn test_service_account_rejected() {
        let err = Credentials::from_json(r#"{"type": "service_account", "private_key": "..."}"#)
            .unwrap_err();
        assert_eq!(err.code, crate::common::ErrorCode::Credentials);
    }

    #[test]
    fn test_missing_refresh_token() {
        let err = Credentials::from_json(
            r#"{"type": "authorized_user", "client_id": "id", "client_secret": "secret"}"#,
        )
        .unwrap_err();
        assert!(err.message.contains("refresh_token"));
    }

    #[test]
    fn test_first_existing_skips_missing() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"access_token": "t"}}"#).unwrap();

        let candidates = vec![
            PathBuf::from("/definitely/not/here.json"),
            file.path().to_path_buf(),
        ];
        assert_eq!(first_existing(&candidates).unwrap(), file.path());
        assert!(first_existing(&candidates[..1]).is_err());
    }
}
