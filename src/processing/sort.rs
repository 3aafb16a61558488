//! Sorting into a new sequence.

use std::cmp::Ordering;

/// Collects `items` into a new `Vec` ordered by `compare`.
///
/// The sort is stable: elements that compare equal keep their original relative order.
pub fn sorted_by<I, F>(items: I, compare: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut out: Vec<I::Item> = items.into_iter().collect();
    out.sort_by(compare);
    out
}

/// Collects `items` into a new `Vec` ordered ascending by `key`. Stable.
pub fn sorted_by_key<I, K, F>(items: I, key: F) -> Vec<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut out: Vec<I::Item> = items.into_iter().collect();
    out.sort_by_key(key);
    out
}
