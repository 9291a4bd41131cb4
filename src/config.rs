//! Configuration loading
//!
//! Values come from an optional TOML file, overridden by `CTG_`-prefixed
//! environment variables (`CTG_API__API_KEY`, `CTG_API__API_SECRET`, ...).
//! A `.env` file in the working directory is loaded first.

use crate::client::auth::Credentials;
use crate::error::Result;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

/// API endpoint and credentials
#[derive(Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// HTTP request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ApiConfig {
    /// Validated credentials; blank key or secret is a configuration error
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::new(self.api_key.clone(), self.api_secret.clone())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load from `path` (may be missing, `~` is expanded) and the environment
    pub fn load(path: &str) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = PathBuf::from(shellexpand::tilde(path).into_owned());
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("CTG")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        tracing::debug!("Loaded config for {}", config.api.base_url);
        Ok(config)
    }
}
