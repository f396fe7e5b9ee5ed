//! Client configuration
//!
//! The only setting is the base URL, which defaults to the public Graph API
//! host. It can be overridden through the builder or a YAML file:
//!
//! ```yaml
//! base_url: https://graph.instagram.com
//! ```

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Base URL of the Instagram Graph API
pub const DEFAULT_BASE_URL: &str = "https://graph.instagram.com";

/// Configuration for [`GraphApi`](super::GraphApi)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphApiConfig {
    /// Base URL every endpoint is joined onto, stored verbatim
    pub base_url: String,
}

impl Default for GraphApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl GraphApiConfig {
    /// Create a new config builder
    pub fn builder() -> GraphApiConfigBuilder {
        GraphApiConfigBuilder::default()
    }

    /// Parse a config from a YAML string and validate it
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file and validate it
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Check that the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base_url cannot be empty"));
        }

        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(Error::config(format!(
                "base_url must use http or https, got '{other}'"
            ))),
        }
    }
}

/// Builder for [`GraphApiConfig`]
#[derive(Debug, Default)]
pub struct GraphApiConfigBuilder {
    config: GraphApiConfig,
}

impl GraphApiConfigBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Build the config
    pub fn build(self) -> GraphApiConfig {
        self.config
    }
}
