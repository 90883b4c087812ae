//! Errors reported when building or updating a frequency set from loosely
//! typed input.

use thiserror::Error;

/// Errors returned when building or updating a [`FrequencySet`] from
/// loosely typed input.
///
/// Operations on statically typed values never fail; these only surface
/// through [`FrequencySet::try_from_value`] and [`FrequencySet::try_add`].
///
/// [`FrequencySet`]: crate::FrequencySet
/// [`FrequencySet::try_from_value`]: crate::FrequencySet::try_from_value
/// [`FrequencySet::try_add`]: crate::FrequencySet::try_add
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The seed source has no way to be iterated.
    #[error("object is not iterable (cannot read property Symbol(Symbol.iterator))")]
    NotIterable,
    /// The count given to an add was not a number.
    #[error("count must be a number")]
    InvalidCount,
}

/// Result type for fallible frequency set operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::NotIterable.to_string(),
            "object is not iterable (cannot read property Symbol(Symbol.iterator))"
        );
        assert_eq!(Error::InvalidCount.to_string(), "count must be a number");
    }
}
