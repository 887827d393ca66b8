//! Path Utilities
//!
//! Common path resolution for the google-objects directory and files.

use std::path::PathBuf;

use super::error::GoogleError;

/// Get the base directory (`~/.google-objects/`)
pub fn google_objects_dir() -> Result<PathBuf, GoogleError> {
    let home = dirs::home_dir()
        .ok_or_else(|| GoogleError::config("Could not determine home directory"))?;
    Ok(home.join(".google-objects"))
}

/// Get a path within the base directory
pub fn google_objects_path(relative_path: &str) -> Result<PathBuf, GoogleError> {
    Ok(google_objects_dir()?.join(relative_path))
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf, GoogleError> {
    google_objects_path("config.json")
}

/// Get the default credentials file path
pub fn default_credentials_path() -> Result<PathBuf, GoogleError> {
    google_objects_path("credentials.json")
}
