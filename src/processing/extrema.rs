//! Maximum / minimum selection.
//!
//! Unlike [`Iterator::max_by_key`], which returns the *last* of several equal maxima, every
//! function here returns the *first* extreme element in iteration order.

use std::cmp::Ordering;

use crate::error::{PipelineError, PipelineResult};

/// Returns the first element for which no later element compares strictly greater.
///
/// Fails with [`PipelineError::EmptyInput`] when `items` is empty.
pub fn max_by<I, F>(items: I, mut compare: F) -> PipelineResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    pick(items, "max", |candidate, best| {
        compare(candidate, best) == Ordering::Greater
    })
}

/// Returns the first element for which no later element compares strictly less.
///
/// Fails with [`PipelineError::EmptyInput`] when `items` is empty.
pub fn min_by<I, F>(items: I, mut compare: F) -> PipelineResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    pick(items, "min", |candidate, best| {
        compare(candidate, best) == Ordering::Less
    })
}

/// Element with the greatest `key`; the first one wins on ties.
pub fn max_by_key<I, K, F>(items: I, mut key: F) -> PipelineResult<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    max_by(items, |a, b| key(a).cmp(&key(b)))
}

/// Element with the least `key`; the first one wins on ties.
pub fn min_by_key<I, K, F>(items: I, mut key: F) -> PipelineResult<I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    min_by(items, |a, b| key(a).cmp(&key(b)))
}

fn pick<I, F>(items: I, operation: &'static str, mut replaces: F) -> PipelineResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut iter = items.into_iter();
    let mut best = iter.next().ok_or_else(|| PipelineError::empty(operation))?;
    for item in iter {
        if replaces(&item, &best) {
            best = item;
        }
    }
    Ok(best)
}
