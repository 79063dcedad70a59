//! Pagination module
//!
//! Offset pagination over fixed pages of ten, with one extra record
//! requested as a sentinel.
//!
//! # Overview
//!
//! Every request asks for `PAGE_SIZE + 1` records. When the server returns
//! more than `PAGE_SIZE`, a further page exists and the extra record is
//! dropped before classification. This only works if the server returns
//! records in a stable order across calls.

mod query;
mod types;

pub use query::{apply_options, offset_for_page, COLOR_PARAM, LIMIT_PARAM, OFFSET_PARAM};
pub use types::{PageCursors, FETCH_LIMIT, PAGE_SIZE};
