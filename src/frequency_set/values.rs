use std::iter::FusedIterator;

use crate::Count;

/// An iterator over the distinct values of a [`FrequencySet`], in insertion
/// order.
///
/// This struct is created by the [`values`] method on [`FrequencySet`]. See
/// its documentation for more.
///
/// [`FrequencySet`]: crate::FrequencySet
/// [`values`]: crate::FrequencySet::values
#[derive(Clone, Debug)]
pub struct Values<'a, T>(pub(crate) indexmap::map::Keys<'a, T, Count>);

impl<'a, T> Iterator for Values<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for Values<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for Values<'_, T> {}

impl<T> FusedIterator for Values<'_, T> {}
