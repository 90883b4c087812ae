use crate::Count;

/// A single item used to seed a [`FrequencySet`].
///
/// Seeds tag explicitly whether an item is a bare value, counted once, or a
/// value paired with the count it should start at.
///
/// # Examples
///
/// ```
/// use frequency_set::{FrequencySet, Seed};
///
/// let set: FrequencySet<&str> = [Seed::Value("foo"), Seed::ValueCount("bar", 4)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(set.count(&"foo"), Some(1));
/// assert_eq!(set.count(&"bar"), Some(4));
/// ```
///
/// [`FrequencySet`]: crate::FrequencySet
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Seed<T> {
    /// A value with an implicit count of one.
    Value(T),
    /// A value with an explicit count.
    ValueCount(T, Count),
}

impl<T> Seed<T> {
    /// Returns the value this seed carries.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Value(value) | Self::ValueCount(value, _) => value,
        }
    }

    /// Returns the count this seed contributes.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> Count {
        match self {
            Self::Value(_) => 1,
            Self::ValueCount(_, count) => *count,
        }
    }

    /// Splits the seed into its value and count.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (T, Count) {
        match self {
            Self::Value(value) => (value, 1),
            Self::ValueCount(value, count) => (value, count),
        }
    }
}

impl<T> From<(T, Count)> for Seed<T> {
    #[inline]
    fn from((value, count): (T, Count)) -> Self {
        Self::ValueCount(value, count)
    }
}

#[cfg(test)]
mod tests {
    use super::Seed;

    #[test]
    fn bare_value_counts_once() {
        assert_eq!(Seed::Value('a').count(), 1);
        assert_eq!(Seed::Value('a').into_parts(), ('a', 1));
    }

    #[test]
    fn pair_converts_to_value_count() {
        let seed = Seed::from(("boo", 5));
        assert_eq!(seed, Seed::ValueCount("boo", 5));
        assert_eq!(seed.value(), &"boo");
        assert_eq!(seed.count(), 5);
    }
}
