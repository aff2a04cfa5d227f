//! Client configuration: the backend base address, where the session is
//! persisted, and the request timeout. Values come from CLI flags or their
//! environment fallbacks; nothing here is secret.

use std::{path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

/// Default request timeout applied by the gateway.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const STORAGE_DIR: &str = "student-atlas";
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL is not configured")]
    MissingBaseUrl,
    #[error("invalid API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage_path: PathBuf,
    pub timeout: Duration,
}

impl AppConfig {
    /// Builds a config with the default storage path and timeout.
    ///
    /// # Errors
    /// Returns an error if `api_base_url` is empty or not an absolute http(s) URL.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            storage_path: default_storage_path(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        })
    }

    #[must_use]
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Trims whitespace and trailing slashes and checks the URL shape.
///
/// # Errors
/// Returns an error if the value is empty, unparsable, has no host, or is not http(s).
pub fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|err| invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(invalid(format!("unsupported scheme {scheme}"))),
    }
    if url.host().is_none() {
        return Err(invalid("no host specified".to_string()));
    }

    Ok(trimmed.to_string())
}

/// `<local data dir>/student-atlas/storage.json`, or a dot-file in the working
/// directory when the platform has no data dir.
#[must_use]
pub fn default_storage_path() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(format!(".{STORAGE_DIR}.json")),
        |dir| dir.join(STORAGE_DIR).join(STORAGE_FILE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn normalize_base_url_trims_trailing_slashes() -> Result<()> {
        assert_eq!(
            normalize_base_url("  https://api.university.edu/ ")?,
            "https://api.university.edu"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080//")?,
            "http://localhost:8080"
        );
        Ok(())
    }

    #[test]
    fn normalize_base_url_rejects_empty_and_bad_schemes() {
        assert_eq!(normalize_base_url("   "), Err(ConfigError::MissingBaseUrl));
        assert!(matches!(
            normalize_base_url("ftp://files.university.edu"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn new_applies_defaults() -> Result<()> {
        let config = AppConfig::new("https://api.university.edu")?;
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS));
        assert_eq!(config.storage_path, default_storage_path());

        let config = config
            .with_storage_path("/tmp/atlas.json")
            .with_timeout(Duration::from_secs(3));
        assert_eq!(config.storage_path, PathBuf::from("/tmp/atlas.json"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        Ok(())
    }
}
