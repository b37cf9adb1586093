//! CLI configuration.
//!
//! Provider settings come from a TOML config file
//! (`<config dir>/signprep/config.toml`), overridden by environment
//! variables. The library crates take explicit parameters; only the CLI
//! reads ambient configuration.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the provider base URL.
pub const URL_ENV: &str = "SIGNPREP_PROVIDER_URL";
/// Environment variable overriding the provider API token.
pub const KEY_ENV: &str = "SIGNPREP_API_KEY";

/// Persistent CLI settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Provider API base URL, e.g. `https://esign.example.com/api`
    pub provider_url: Option<String>,

    /// Provider API token
    pub api_key: Option<String>,
}

impl CliConfig {
    /// Path of the config file, if a config directory exists on this
    /// platform.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signprep").join("config.toml"))
    }

    /// Load settings from the config file (when present), then apply
    /// environment overrides. Unreadable or malformed files degrade to
    /// defaults rather than failing a command that may not need them.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .and_then(|path| std::fs::read_to_string(path).ok())
            .and_then(|raw| match toml::from_str::<Self>(&raw) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    log::warn!("ignoring malformed config file: {err}");
                    None
                }
            })
            .unwrap_or_default();
        config.apply_env();
        config
    }

    /// Apply environment-variable overrides in place.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(URL_ENV) {
            if !url.is_empty() {
                self.provider_url = Some(url);
            }
        }
        if let Ok(key) = std::env::var(KEY_ENV) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    /// Resolve the provider URL and token, or explain how to set them.
    ///
    /// # Errors
    /// Fails when either setting is missing.
    pub fn provider(&self) -> Result<(String, String)> {
        match (&self.provider_url, &self.api_key) {
            (Some(url), Some(key)) => Ok((url.clone(), key.clone())),
            _ => bail!(
                "provider not configured; set {URL_ENV} and {KEY_ENV}, or write \
                 provider_url/api_key to {}",
                Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "the signprep config file".to_string())
            ),
        }
    }
}
