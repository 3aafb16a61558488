//! Side-effecting iteration.

/// Applies `consumer` to every element, in order.
pub fn for_each<I, F>(items: I, consumer: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    items.into_iter().for_each(consumer)
}
