//! Configuration for the records retriever
//!
//! The endpoint is fixed per process: it is configured once, either in code
//! or from a YAML file, and handed to the [`Retriever`] at construction.
//!
//! ```yaml
//! base_path: http://localhost:3000/records
//! http:
//!   timeout_secs: 10
//!   headers:
//!     X-Api-Key: secret
//! ```
//!
//! [`Retriever`]: crate::retriever::Retriever

use crate::error::{Error, Result, ResultExt};
use crate::http::{default_user_agent, HttpClientConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Endpoint used when none is configured
pub const DEFAULT_BASE_PATH: &str = "http://localhost:3000/records";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete retriever configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Records endpoint, without pagination parameters
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// HTTP transport settings
    #[serde(default)]
    pub http: HttpSettings,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            http: HttpSettings::default(),
        }
    }
}

impl RecordsConfig {
    /// Config pointing at the given endpoint with default transport settings
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            http: HttpSettings::default(),
        }
    }

    /// Replace the transport settings
    #[must_use]
    pub fn with_http(mut self, http: HttpSettings) -> Self {
        self.http = http;
        self
    }

    /// Parse the base path
    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_path)?)
    }

    /// Check the config can produce requests
    pub fn validate(&self) -> Result<()> {
        if self.base_path.trim().is_empty() {
            return Err(Error::config("base_path cannot be empty"));
        }

        let url = self
            .base_url()
            .with_context(|| format!("Invalid base_path '{}'", self.base_path))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_path must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Transport timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl From<&HttpSettings> for HttpClientConfig {
    fn from(settings: &HttpSettings) -> Self {
        let mut builder = HttpClientConfig::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        for (key, value) in &settings.headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder.build()
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<RecordsConfig> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::config(format!(
                "Config file '{}' not found",
                path.display()
            )));
        }
        Err(e) => return Err(Error::Io(e)),
    };
    load_config_from_str(&content)
}

/// Load and validate a config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<RecordsConfig> {
    let config: RecordsConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
