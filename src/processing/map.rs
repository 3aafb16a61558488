//! Element-wise transformation.

/// Returns a lazy iterator applying `mapper` to every element, same order and length.
///
/// `mapper` may have side effects. Mapping over `iter_mut()` lets it update each element in
/// place while also producing an output value; those updates remain visible in the source
/// sequence afterwards.
///
/// Nothing runs until the returned iterator is consumed.
pub fn map<I, U, F>(items: I, mapper: F) -> impl Iterator<Item = U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(mapper)
}
