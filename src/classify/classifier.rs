//! Page classifier

use crate::pagination::{PageCursors, PAGE_SIZE};
use crate::types::{ClassifiedResult, RawRecord, RetrievalOptions};
use tracing::debug;

/// Classify one fetched page of records.
///
/// Records keep their server order. Each record lands in exactly one of:
/// `open`, `closed_primary_count`, or neither (closed, not primary); all of
/// them contribute their id to `ids`.
pub fn classify(mut records: Vec<RawRecord>, options: &RetrievalOptions) -> ClassifiedResult {
    let had_sentinel = records.len() > PAGE_SIZE;
    if had_sentinel {
        records.pop();
    }

    let cursors = PageCursors::compute(options, records.len(), had_sentinel);
    debug!(
        kept = records.len(),
        had_sentinel,
        previous = ?cursors.previous,
        next = ?cursors.next,
        "Classifying records page"
    );

    let mut result = ClassifiedResult {
        ids: Vec::with_capacity(records.len()),
        previous_page: cursors.previous,
        next_page: cursors.next,
        ..Default::default()
    };

    for record in records {
        result.ids.push(record.id);
        if record.disposition.is_open() {
            result.open.push(record.into());
        } else if record.is_primary() {
            result.closed_primary_count += 1;
        }
    }

    result
}
