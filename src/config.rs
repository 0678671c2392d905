//! Notification Configuration
//!
//! Endpoint, credential, and timeout settings for the block. The access
//! token is injected at load time — from the config file or the
//! `LINE_NOTIFY_TOKEN` environment variable — and is excluded from
//! serialization and `Debug` output so it cannot leak into saved config,
//! IPC responses, or logs.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable consulted for the access token. Overrides any
/// token present in the config file.
pub const TOKEN_ENV_VAR: &str = "LINE_NOTIFY_TOKEN";

/// Default notification webhook endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://notify-api.line.me/api/notify";

/// Default per-dispatch timeout budget.
pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the notification block.
#[derive(Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Webhook endpoint the block POSTs to.
    #[serde(default = "default_endpoint")]
    pub endpoint_url: String,
    /// Bearer token for the webhook. Injected from the environment or the
    /// config file, held in memory only. Excluded from serialization to
    /// prevent accidental exposure in saved config or IPC responses.
    #[serde(skip_serializing, default)]
    pub access_token: String,
    /// Per-dispatch timeout budget in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint(),
            access_token: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl NotifyConfig {
    /// Build a config from an explicit token, using default endpoint and
    /// timeout.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: token.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file, then let the token
    /// environment variable override whatever the file carried.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut config: NotifyConfig = serde_json::from_str(&content)?;
        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            if !token.is_empty() {
                config.access_token = token;
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Load from the environment alone: default endpoint and timeout,
    /// token from `LINE_NOTIFY_TOKEN`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR).unwrap_or_default();
        let config = Self::with_token(token);
        config.validate()?;
        Ok(config)
    }

    /// Check the settings are usable before constructing a block.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_token.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "access token is not configured; set {TOKEN_ENV_VAR} or provide it in the config file"
            )));
        }
        let url = Url::parse(&self.endpoint_url)
            .map_err(|e| ConfigError::Invalid(format!("endpoint URL: {e}")))?;
        if url.scheme() != "https" {
            return Err(ConfigError::Invalid(
                "endpoint URL must use https".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timeout must be nonzero".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for NotifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("access_token", &"<redacted>")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
