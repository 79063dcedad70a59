//! HTTP client and response gate
//!
//! A thin wrapper over `reqwest` that issues exactly one request per call.
//! There is no retry loop and no client-side timeout unless one is
//! configured on the transport.

use crate::error::{Error, Result};
use crate::types::RawRecord;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Transport timeout; `None` leaves requests unbounded
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            default_headers: HashMap::new(),
            user_agent: default_user_agent(),
        }
    }
}

/// User agent sent when none is configured
pub fn default_user_agent() -> String {
    format!("managed-records/{}", env!("CARGO_PKG_VERSION"))
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Single-shot HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// Issue one GET request.
    ///
    /// Only transport failures are errors here; the status is left for
    /// [`check_response`] to judge.
    pub async fn get(&self, url: &Url) -> Result<Response> {
        let mut req = self.client.get(url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        debug!("GET {}", url);
        let response = req.send().await?;
        debug!("Response {} for {}", response.status().as_u16(), url);

        Ok(response)
    }

    /// GET a page of records and pass the response through the gate
    pub async fn get_records(&self, url: &Url) -> Result<Vec<RawRecord>> {
        let response = self.get(url).await?;
        check_response(response).await
    }
}

/// Response gate.
///
/// A success status yields the body parsed as a list of records; any other
/// status becomes `Error::HttpStatus` carrying the status text. The error
/// never reaches the classifier as data.
pub async fn check_response(response: Response) -> Result<Vec<RawRecord>> {
    let status = response.status();
    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or_default();
        return Err(Error::http_status(status.as_u16(), status_text));
    }

    let body = response.bytes().await?;
    let records: Vec<RawRecord> = serde_json::from_slice(&body)?;
    Ok(records)
}
