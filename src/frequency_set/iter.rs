use std::iter::FusedIterator;

use crate::Count;

/// An iterator over the values of a [`FrequencySet`] and their counts, in
/// insertion order.
///
/// This struct is created by the [`entries`] method on [`FrequencySet`], or by
/// iterating over a reference to one.
///
/// # Examples
///
/// ```
/// use frequency_set::FrequencySet;
///
/// let set = FrequencySet::from_values(["boo", "boo", "bar"]);
///
/// let mut iter = set.entries();
/// assert_eq!(iter.next(), Some((&"boo", 2)));
/// assert_eq!(iter.next(), Some((&"bar", 1)));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`FrequencySet`]: crate::FrequencySet
/// [`entries`]: crate::FrequencySet::entries
#[derive(Clone, Debug)]
pub struct Iter<'a, T>(pub(crate) indexmap::map::Iter<'a, T, Count>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a T, Count);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(value, count)| (value, *count))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(value, count)| (value, *count))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
