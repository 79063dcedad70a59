//! Records retriever
//!
//! Composes the query builder, one GET, the response gate and the
//! classifier into a single call.
//!
//! The endpoint must return records in a stable order across calls;
//! page boundaries are computed from offsets alone.

use crate::classify::classify;
use crate::config::RecordsConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::apply_options;
use crate::source::RecordSource;
use crate::types::{ClassifiedResult, RetrievalOptions};
use tracing::{debug, error};
use url::Url;

/// Retrieves and classifies pages of records from one configured endpoint
#[derive(Debug, Clone)]
pub struct Retriever<S = HttpClient> {
    config: RecordsConfig,
    source: S,
}

impl Retriever<HttpClient> {
    /// Create a retriever backed by an HTTP client built from `config.http`
    pub fn new(config: RecordsConfig) -> Result<Self> {
        let client = HttpClient::with_config(HttpClientConfig::from(&config.http))?;
        Ok(Self::with_source(config, client))
    }
}

impl<S: RecordSource> Retriever<S> {
    /// Create a retriever over any record source
    pub fn with_source(config: RecordsConfig, source: S) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &RecordsConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build the request URL for `options` without sending anything
    pub fn request_url(&self, options: &RetrievalOptions) -> Result<Url> {
        let mut url = self.config.base_url()?;
        apply_options(&mut url, options);
        Ok(url)
    }

    /// Retrieve one page, returning the typed error on failure
    pub async fn try_retrieve(&self, options: &RetrievalOptions) -> Result<ClassifiedResult> {
        let url = self.request_url(options)?;
        let records = self.source.fetch_records(&url).await?;
        debug!(count = records.len(), "Fetched records");
        Ok(classify(records, options))
    }

    /// Retrieve one page.
    ///
    /// Never fails and never panics: any error (bad base path, transport,
    /// non-success status, malformed body) is logged once at error level
    /// and the call returns `None`.
    pub async fn retrieve(&self, options: &RetrievalOptions) -> Option<ClassifiedResult> {
        match self.try_retrieve(options).await {
            Ok(result) => Some(result),
            Err(e) => {
                error!(base_path = %self.config.base_path, "Failed to retrieve records: {e}");
                None
            }
        }
    }
}
