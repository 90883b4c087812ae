#![warn(clippy::pedantic, clippy::nursery, clippy::cargo)]
#![deny(missing_docs)]

//! This crate provides a frequency set: an insertion-ordered multiset that
//! stores every distinct value once, along with how many times it was added.
//!
//! Lookups, additions and membership tests are constant time on average, as
//! values are kept in an [`IndexMap`]. Deleting a value is linear in the number
//! of values stored after it, since the remaining values keep their relative
//! order.
//!
//! Values are compared with their [`Hash`] and [`Eq`] implementations. Types
//! that should be told apart by identity rather than content, such as handles
//! to shared objects, need to implement those traits accordingly; the
//! [`Handle`] type does this for reference-counted pointers.
//!
//! For input whose shape is only known at runtime, [`Value`] models a loosely
//! typed value and [`FrequencySet::try_from_value`] builds a set from it,
//! reporting an [`Error`] for sources that cannot be iterated and counts that
//! are not numbers.
//!
//! ```
//! use frequency_set::FrequencySet;
//!
//! let mut set = FrequencySet::from_values(["foo", "foo", "boo", "bar"]);
//! set.add("bar").add_count("baz", 3);
//!
//! assert_eq!(
//!     set.entries().collect::<Vec<_>>(),
//!     vec![(&"foo", 2), (&"boo", 1), (&"bar", 2), (&"baz", 3)]
//! );
//! assert_eq!(
//!     set.to_json_string().unwrap(),
//!     r#"[["foo",2],["boo",1],["bar",2],["baz",3]]"#
//! );
//! ```
//!
//! [`IndexMap`]: indexmap::IndexMap

pub mod error;
mod frequency_set;
mod seed;
mod stringify;
mod value;

pub use crate::error::{Error, Result};
pub use crate::frequency_set::{FrequencySet, IntoIter, Iter, Values};
pub use crate::seed::Seed;
pub use crate::stringify::{Kind, Stringify};
pub use crate::value::{Handle, Value};

/// The number of occurrences of a value.
pub type Count = i64;

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::FrequencySet;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    proptest! {
        #[test]
        fn distinct_values_count_once(values in proptest::collection::hash_set(any::<u16>(), 0..64)) {
            init_logger();
            let values: Vec<_> = values.into_iter().collect();
            let set = FrequencySet::from_values(values.iter().copied());

            let expected: Vec<_> = values.iter().map(|value| (value, 1)).collect();
            prop_assert_eq!(set.entries().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn repeated_adds_accumulate(value in any::<String>(), times in 1_usize..50) {
            let mut set = FrequencySet::new();
            for _ in 0..times {
                set.add(value.clone());
            }

            prop_assert!(set.has(&value));
            prop_assert_eq!(set.count(&value), Some(times as i64));
        }

        #[test]
        fn delete_removes_exactly_once(values in proptest::collection::vec(0_u8..16, 0..64), probe in 0_u8..16) {
            let mut set = FrequencySet::from_values(values.iter().copied());
            let before: Vec<_> = set.values().copied().filter(|value| *value != probe).collect();

            prop_assert_eq!(set.delete(&probe), values.contains(&probe));
            prop_assert!(!set.delete(&probe));
            prop_assert!(!set.has(&probe));
            prop_assert_eq!(set.values().copied().collect::<Vec<_>>(), before);
        }

        #[test]
        fn clear_always_empties(values in proptest::collection::vec(any::<i32>(), 0..64)) {
            let mut set = FrequencySet::from_values(values);
            set.clear();
            prop_assert_eq!(set.values().count(), 0);
            set.clear();
            prop_assert!(set.is_empty());
        }

        #[test]
        fn entries_round_trip(values in proptest::collection::vec(0_u8..32, 0..128)) {
            let set = FrequencySet::from_values(values);
            let copy = FrequencySet::from_pairs(set.entries().map(|(value, count)| (*value, count)));

            prop_assert_eq!(
                copy.entries().collect::<Vec<_>>(),
                set.entries().collect::<Vec<_>>()
            );
        }

        #[test]
        fn total_matches_number_of_adds(values in proptest::collection::vec(any::<char>(), 0..128)) {
            let set = FrequencySet::from_values(values.iter().copied());
            prop_assert_eq!(set.total(), values.len() as i64);
        }
    }
}
