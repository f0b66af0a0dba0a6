//! Sort Module
//!
//! The three orderings the record book offers, each built on a small
//! generic algorithm.
//!
//! | Operation                  | Algorithm | Key          | Order      | Stable |
//! |----------------------------|-----------|--------------|------------|--------|
//! | [`bubble_sort_by_id`]      | bubble    | id (string)  | ascending  | yes    |
//! | [`shell_sort_by_gpa_desc`] | shell     | gpa          | descending | no     |
//! | [`merge_sort_by_name`]     | merge     | name (lower) | ascending  | yes    |
//!
//! Bubble and shell sort reorder the slice in place. Merge sort consumes the
//! sequence and returns a new one.

use crate::record::Record;

// =============================================================================
// Generic Algorithms
// =============================================================================

/// Bubble sort in place
///
/// `out_of_order(a, b)` returns true when `a` must move after its right
/// neighbour `b`. Runs the full `n` passes with no early exit. Only adjacent
/// elements are swapped, so equal elements keep their relative order.
pub fn bubble_sort_by<T, F>(items: &mut [T], mut out_of_order: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if out_of_order(&items[j], &items[j + 1]) {
                items.swap(j, j + 1);
            }
        }
    }
}

/// Shell sort in place with the halving gap sequence `n/2, n/4, ..., 1`
///
/// Each pass is a gapped insertion sort: the element at `j` keeps moving
/// back by `gap` while `out_of_order(items[j - gap], items[j])` holds.
/// Not stable.
pub fn shell_sort_by<T, F>(items: &mut [T], mut out_of_order: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let n = items.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            // Swapping the held element backwards is equivalent to shifting
            // the larger run forward and dropping it into the hole.
            let mut j = i;
            while j >= gap && out_of_order(&items[j - gap], &items[j]) {
                items.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Recursive top-down merge sort
///
/// Splits at `n/2`, sorts both halves, then merges. `in_order(left, right)`
/// returns true when the left element may be emitted first; on ties it
/// should return true so the left half wins and the sort stays stable.
pub fn merge_sort_by<T, F>(items: Vec<T>, in_order: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let mut left = items;
    let right = left.split_off(left.len() / 2);

    let left = merge_sort_by(left, in_order);
    let right = merge_sort_by(right, in_order);

    merge(left, right, in_order)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, in_order: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => in_order(l, r),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }

    // At most one side still has elements
    result.extend(left);
    result.extend(right);
    result
}

// =============================================================================
// Record Orderings
// =============================================================================

/// Sort ascending by `id`, compared as strings
pub fn bubble_sort_by_id(records: &mut [Record]) {
    bubble_sort_by(records, |a, b| a.id > b.id);
}

/// Sort descending by `gpa` (highest first)
pub fn shell_sort_by_gpa_desc(records: &mut [Record]) {
    shell_sort_by(records, |earlier, later| earlier.gpa() < later.gpa());
}

/// Sort ascending by `name`, ignoring case
pub fn merge_sort_by_name(records: Vec<Record>) -> Vec<Record> {
    merge_sort_by(records, &|a: &Record, b: &Record| {
        a.name.to_lowercase() <= b.name.to_lowercase()
    })
}
