//! First-seen-wins deduplication
//!
//! Listing exports can surface the same record more than once when source
//! pages overlap. Records are keyed by a caller-supplied stable key (a job
//! code for ad exports); keyless records are never deduplicated.

use std::collections::HashSet;

/// Drop every record whose key was already produced by an earlier record,
/// preserving the relative order of everything retained. Records for which
/// `key_fn` yields `None` or an empty string are always kept.
pub(crate) fn dedupe_by_key<T, F>(records: Vec<T>, key_fn: F) -> Vec<T>
where
    F: Fn(&T) -> Option<String>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| match key_fn(record) {
            Some(key) if !key.is_empty() => seen.insert(key),
            _ => true,
        })
        .collect()
}
