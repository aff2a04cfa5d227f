use crate::config::{default_storage_path, AppConfig, DEFAULT_TIMEOUT_SECONDS};
use anyhow::Result;
use std::{path::PathBuf, time::Duration};

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub storage_path: PathBuf,
    pub timeout: Duration,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            storage_path: default_storage_path(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }

    /// # Errors
    /// Returns an error if the base address is not a usable http(s) URL.
    pub fn config(&self) -> Result<AppConfig> {
        Ok(AppConfig::new(&self.api_url)?
            .with_storage_path(&self.storage_path)
            .with_timeout(self.timeout))
    }
}
