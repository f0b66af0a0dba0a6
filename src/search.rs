//! Search Module
//!
//! - Linear search: case-insensitive substring match on `name`, any order
//! - Binary search: exact match on `id`, needs the slice sorted by id
//!
//! ## Note on id ordering
//! Ids are compared as strings, so the order binary search relies on is
//! lexicographic: `"10" < "9"`. This matches the order produced by
//! [`bubble_sort_by_id`], which is what keeps the search correct.

use std::cmp::Ordering;

use crate::record::Record;
use crate::sort::bubble_sort_by_id;

/// Return every record whose name contains `query`, ignoring case
///
/// Matches come back in collection order. An empty result means nothing
/// matched. An empty query matches every record.
pub fn linear_search<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

/// Sort `records` by id, then binary search for `target_id`
///
/// The bubble sort runs on the caller's slice, so the new order is visible
/// after the call whether or not the id was found.
pub fn binary_search<'a>(records: &'a mut [Record], target_id: &str) -> Option<&'a Record> {
    bubble_sort_by_id(records);
    let records: &'a [Record] = records;
    binary_search_sorted(records, target_id).map(|index| &records[index])
}

/// Classic iterative binary search over a slice already sorted by id
///
/// Returns the index of a record whose id equals `target_id`.
pub fn binary_search_sorted(records: &[Record], target_id: &str) -> Option<usize> {
    if records.is_empty() {
        return None;
    }

    let mut low = 0usize;
    let mut high = records.len() - 1;

    while low <= high {
        // Same as (low + high) / 2 without the overflow
        let mid = low + (high - low) / 2;

        match records[mid].id.as_str().cmp(target_id) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // high would go below zero, which ends the search
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    None
}
