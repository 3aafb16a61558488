//! Filtering and predicate composition.

use std::borrow::Borrow;
use std::fmt;

/// Returns a lazy iterator over the elements for which `predicate` returns `true`.
///
/// Relative order of surviving elements is preserved. Filtering twice in a row is equivalent to
/// filtering once with [`Predicate::and`].
pub fn filter<I, P>(items: I, mut predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(move |item| predicate(item))
}

/// Returns a lazy iterator over the elements that satisfy every predicate in `predicates`.
///
/// An empty predicate list keeps every element.
pub fn filter_all<'p, I, T>(
    items: I,
    predicates: &'p [Predicate<'p, T>],
) -> impl Iterator<Item = I::Item> + 'p
where
    I: IntoIterator + 'p,
    I::IntoIter: 'p,
    I::Item: Borrow<T>,
    T: ?Sized + 'p,
{
    items
        .into_iter()
        .filter(move |item| {
            let value: &T = <I::Item as Borrow<T>>::borrow(item);
            predicates.iter().all(|p| p.test(value))
        })
}

/// A boxed, composable boolean test over `T`.
pub struct Predicate<'a, T: ?Sized> {
    test: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T: ?Sized + 'a> Predicate<'a, T> {
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self {
            test: Box::new(test),
        }
    }

    /// Evaluate the predicate.
    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Logical AND. `other` is not evaluated when `self` is false.
    pub fn and(self, other: Predicate<'a, T>) -> Self {
        Self::new(move |v| self.test(v) && other.test(v))
    }

    /// Logical OR. `other` is not evaluated when `self` is true.
    pub fn or(self, other: Predicate<'a, T>) -> Self {
        Self::new(move |v| self.test(v) || other.test(v))
    }

    pub fn negate(self) -> Self {
        Self::new(move |v| !self.test(v))
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}
