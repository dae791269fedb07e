//! Paging and key-list helpers shared by the store's read paths

use super::StoreError;
use std::collections::HashSet;
use std::ops::Range;

/// Slice bounds of a 1-based page over `total` rows.
///
/// The last page may be partial. A page starting at or past the end, or
/// page 0, is out of range.
pub fn page_range(total: usize, page_size: usize, page: usize) -> Result<Range<usize>, StoreError> {
    let out_of_range = || StoreError::OutOfRange {
        page,
        page_size,
        total,
    };

    if page == 0 {
        return Err(out_of_range());
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= total {
        return Err(out_of_range());
    }
    let end = start.saturating_add(page_size).min(total);

    Ok(start..end)
}

/// Keys present in both lists, in the order of `second`, without duplicates
pub fn intersection(first: &[String], second: &[String]) -> Vec<String> {
    let present: HashSet<&str> = first.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    second
        .iter()
        .filter(|key| present.contains(key.as_str()))
        .filter(|key| seen.insert(key.as_str()))
        .cloned()
        .collect()
}

/// Append `child` to the parent's list unless already recorded
pub fn push_unique(list: &mut Vec<String>, child: &str) {
    if !list.iter().any(|existing| existing == child) {
        list.push(child.to_string());
    }
}
