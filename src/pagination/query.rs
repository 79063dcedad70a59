//! Query builder
//!
//! Writes the `limit`, `offset` and `color[]` parameters for a retrieval
//! onto a request URL.

use super::types::{FETCH_LIMIT, PAGE_SIZE};
use crate::types::RetrievalOptions;
use tracing::debug;
use url::Url;

/// Query parameter carrying the number of records requested
pub const LIMIT_PARAM: &str = "limit";

/// Query parameter carrying the zero-based record offset
pub const OFFSET_PARAM: &str = "offset";

/// Repeated query parameter carrying the color filter
pub const COLOR_PARAM: &str = "color[]";

/// Zero-based record offset for a 1-based page number
pub fn offset_for_page(page: Option<u32>) -> u64 {
    match page {
        None | Some(0 | 1) => 0,
        Some(page) => u64::from(page) * PAGE_SIZE as u64 - PAGE_SIZE as u64,
    }
}

/// Apply retrieval options to a request URL in place.
///
/// Existing `limit`, `offset` and `color[]` pairs are replaced; any other
/// pairs already on the URL are kept. Colors are written in order with
/// repeats skipped; an empty color list writes no `color[]` pairs at all.
pub fn apply_options(url: &mut Url, options: &RetrievalOptions) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !matches!(&**key, LIMIT_PARAM | OFFSET_PARAM | COLOR_PARAM))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let offset = offset_for_page(options.page);

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(retained);
        pairs.append_pair(LIMIT_PARAM, &FETCH_LIMIT.to_string());
        pairs.append_pair(OFFSET_PARAM, &offset.to_string());

        if let Some(colors) = &options.colors {
            let mut written: Vec<&str> = Vec::with_capacity(colors.len());
            for color in colors {
                if !written.contains(&color.as_str()) {
                    pairs.append_pair(COLOR_PARAM, color);
                    written.push(color);
                }
            }
        }
    }

    debug!(page = ?options.page, offset, "Built records query: {}", url);
}
