use std::iter::FusedIterator;

use crate::Count;

/// A consuming iterator over the values of a [`FrequencySet`] and their
/// counts, in insertion order.
///
/// This is constructed by calling `into_iter` on a [`FrequencySet`]. Feeding
/// it to [`FrequencySet::from_pairs`] rebuilds an equal set.
///
/// [`FrequencySet`]: crate::FrequencySet
/// [`FrequencySet::from_pairs`]: crate::FrequencySet::from_pairs
#[derive(Debug)]
pub struct IntoIter<T>(pub(crate) indexmap::map::IntoIter<T, Count>);

impl<T> Iterator for IntoIter<T> {
    type Item = (T, Count);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use crate::FrequencySet;

    #[test]
    fn yields_owned_pairs_in_order() {
        let set = FrequencySet::from_values(vec![
            String::from("b"),
            String::from("a"),
            String::from("b"),
        ]);

        let mut iter = set.into_iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some((String::from("b"), 2)));
        assert_eq!(iter.next(), Some((String::from("a"), 1)));
        assert!(iter.next().is_none());
    }

    #[test]
    fn rebuilds_equal_set() {
        let set = FrequencySet::from_pairs([(1, 4), (2, 1), (3, 9)]);
        let copy = FrequencySet::from_pairs(set.clone());

        assert_eq!(
            copy.entries().collect::<Vec<_>>(),
            set.entries().collect::<Vec<_>>()
        );
    }
}
