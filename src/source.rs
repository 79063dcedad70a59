//! Record source trait
//!
//! The seam between the retriever and whatever produces raw records for a
//! fully-built request URL.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::RawRecord;
use async_trait::async_trait;
use url::Url;

/// Produces one page of raw records for a request URL
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the records at `url`, which already carries pagination and
    /// filter parameters. Implementations make a single attempt.
    async fn fetch_records(&self, url: &Url) -> Result<Vec<RawRecord>>;
}

#[async_trait]
impl RecordSource for HttpClient {
    async fn fetch_records(&self, url: &Url) -> Result<Vec<RawRecord>> {
        self.get_records(url).await
    }
}
