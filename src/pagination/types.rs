//! Pagination types
//!
//! Page size constants and the previous/next cursors derived from a fetch.

use crate::types::RetrievalOptions;

/// Records shown per page
pub const PAGE_SIZE: usize = 10;

/// Records requested per page: one extra to detect a further page
pub const FETCH_LIMIT: usize = PAGE_SIZE + 1;

/// Previous/next page numbers for a fetched page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCursors {
    pub previous: Option<u32>,
    pub next: Option<u32>,
}

impl PageCursors {
    /// Derive cursors for a page.
    ///
    /// `kept` is the number of records left after the sentinel was dropped,
    /// `had_sentinel` whether the server returned more than a full page.
    pub fn compute(options: &RetrievalOptions, kept: usize, had_sentinel: bool) -> Self {
        let page = options.effective_page();
        let next = had_sentinel.then(|| page.saturating_add(1));

        if options.is_first_page() {
            // The first page always points at page 2 when it has any records,
            // even if the sentinel was absent and no second page exists.
            // Kept as-is: existing callers rely on it.
            return Self {
                previous: None,
                next: (kept > 0).then_some(2),
            };
        }

        Self {
            previous: Some(page - 1),
            next,
        }
    }
}
