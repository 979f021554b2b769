//! Client configuration.
//!
//! [`ClientConfig`] carries everything needed to build a
//! [`NewsClient`](crate::NewsClient). The library never reads the
//! environment; callers fill the key in themselves or load the rest from a
//! YAML file:
//!
//! ```yaml
//! base_url: https://newsapi.org/v2
//! timeout_secs: 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::{Error, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings for one client: credential, API root, timeout and user agent.
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Credential sent as `X-Api-Key`. Usually left out of config files.
    #[serde(default)]
    pub api_key: String,
    /// API root the endpoint paths are joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout; must be non-zero.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    /// Defaults for everything except the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a YAML file; see [`from_yaml_str`](Self::from_yaml_str).
    #[instrument(level = "info", skip_all)]
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&yaml)?;
        info!(path = %path.display(), base_url = %config.base_url, "Loaded client config");
        Ok(config)
    }

    /// Check the key is present, the base URL parses and the timeout is set.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }
        Url::parse(&self.base_url)?;
        if self.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// `base_url` joined with `path`, keeping exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
