//! Common types used throughout managed-records
//!
//! Request options, the records the server sends back, and the
//! classified result handed to callers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// Server-assigned record identifier
pub type RecordId = u64;

/// Colors counted as "primary"
pub const PRIMARY_COLORS: [&str; 3] = ["red", "yellow", "blue"];

/// Check whether a color is one of the primary colors
pub fn is_primary(color: &str) -> bool {
    PRIMARY_COLORS.contains(&color)
}

// ============================================================================
// Request Options
// ============================================================================

/// Options for a single retrieval
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalOptions {
    /// 1-based page number; `None` and `Some(0)` both mean the first page
    #[serde(default)]
    pub page: Option<u32>,

    /// Color filter; `None` leaves the filter off entirely
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

impl RetrievalOptions {
    /// Options for the first page with no color filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the color filter
    #[must_use]
    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// True when no page, page 0 or page 1 was requested
    pub fn is_first_page(&self) -> bool {
        matches!(self.page, None | Some(0 | 1))
    }

    /// The requested page with the first-page default applied
    pub fn effective_page(&self) -> u32 {
        match self.page {
            None | Some(0) => 1,
            Some(page) => page,
        }
    }
}

// ============================================================================
// Server Records
// ============================================================================

/// Record status as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Open,
    /// Anything the server reports that is not "open"
    #[default]
    #[serde(other)]
    Closed,
}

impl Disposition {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// A record as returned by the records endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: RecordId,
    pub disposition: Disposition,
    pub color: String,
}

impl RawRecord {
    pub fn new(id: RecordId, disposition: Disposition, color: impl Into<String>) -> Self {
        Self {
            id,
            disposition,
            color: color.into(),
        }
    }

    pub fn is_primary(&self) -> bool {
        is_primary(&self.color)
    }
}

// ============================================================================
// Classified Result
// ============================================================================

/// An open record together with its derived primary flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRecordView {
    pub id: RecordId,
    pub color: String,
    pub disposition: Disposition,
    pub is_primary: bool,
}

impl From<RawRecord> for OpenRecordView {
    fn from(record: RawRecord) -> Self {
        let is_primary = record.is_primary();
        Self {
            id: record.id,
            color: record.color,
            disposition: record.disposition,
            is_primary,
        }
    }
}

/// One page of records, classified
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedResult {
    /// Ids of every record on the page, in server order
    pub ids: Vec<RecordId>,
    /// Open records, in server order
    pub open: Vec<OpenRecordView>,
    /// Closed records with a primary color
    pub closed_primary_count: u64,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
}
