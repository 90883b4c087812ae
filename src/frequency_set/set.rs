use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Formatter};
use std::hash::{BuildHasher, Hash};

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::seed::Seed;
use crate::stringify::Stringify;
use crate::value::Value;
use crate::Count;

use super::{IntoIter, Iter, Values};

/// An insertion-ordered multiset: every distinct value is stored once along
/// with the number of times it was added.
///
/// Values keep the position of their first insertion. Adding a value that is
/// already present only changes its count.
///
/// # Examples
///
/// ```
/// use frequency_set::FrequencySet;
///
/// let mut set = FrequencySet::new();
/// set.add("foo").add("bar").add("foo");
///
/// assert_eq!(set.count(&"foo"), Some(2));
/// assert_eq!(set.entries().collect::<Vec<_>>(), vec![(&"foo", 2), (&"bar", 1)]);
///
/// assert!(set.delete(&"foo"));
/// assert!(!set.has(&"foo"));
/// ```
#[derive(Clone)]
pub struct FrequencySet<T, S = RandomState> {
    data: IndexMap<T, Count, S>,
}

impl<T> FrequencySet<T> {
    /// Creates an empty frequency set.
    ///
    /// Construction will not heap allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set: FrequencySet<&str> = FrequencySet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: IndexMap::new(),
        }
    }

    /// Creates an empty frequency set with room for at least `capacity`
    /// distinct values.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: IndexMap::with_capacity(capacity),
        }
    }
}

impl<T: Hash + Eq> FrequencySet<T> {
    /// Creates a frequency set counting every value produced by `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_values(["foo", "foo", "bar"]);
    /// assert_eq!(set.entries().collect::<Vec<_>>(), vec![(&"foo", 2), (&"bar", 1)]);
    /// ```
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        <Self as FromIterator<T>>::from_iter(values)
    }

    /// Creates a frequency set from `(value, count)` pairs. Counts of repeated
    /// values accumulate.
    ///
    /// Since iterating a frequency set yields such pairs, this also copies a
    /// set while keeping its counts and order.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_pairs([("boo", 5), ("foo", 2)]);
    /// assert_eq!(set.entries().collect::<Vec<_>>(), vec![(&"boo", 5), (&"foo", 2)]);
    ///
    /// let copy = FrequencySet::from_pairs(set.clone());
    /// assert_eq!(copy, set);
    /// ```
    #[must_use]
    pub fn from_pairs<I: IntoIterator<Item = (T, Count)>>(pairs: I) -> Self {
        let mut set = Self::new();
        for (value, count) in pairs {
            set.add_count(value, count);
        }
        set
    }

    /// Creates a frequency set from explicitly tagged seeds.
    #[must_use]
    pub fn from_seeds<I: IntoIterator<Item = Seed<T>>>(seeds: I) -> Self {
        <Self as FromIterator<Seed<T>>>::from_iter(seeds)
    }

    /// Creates a frequency set from a source that may be absent. An absent
    /// source yields an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let empty = FrequencySet::<&str>::from_optional(None::<Vec<_>>);
    /// assert!(empty.is_empty());
    ///
    /// let set = FrequencySet::from_optional(Some(vec!["foo"]));
    /// assert!(set.has(&"foo"));
    /// ```
    #[must_use]
    pub fn from_optional<I: IntoIterator<Item = T>>(values: Option<I>) -> Self {
        values.map_or_else(Self::new, Self::from_values)
    }
}

impl<T, S> FrequencySet<T, S> {
    /// Creates an empty frequency set which uses `hasher` to hash values.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::hash_map::RandomState;
    ///
    /// use frequency_set::FrequencySet;
    ///
    /// let mut set = FrequencySet::with_hasher(RandomState::new());
    /// set.add(1);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            data: IndexMap::with_hasher(hasher),
        }
    }

    /// Creates an empty frequency set with room for at least `capacity`
    /// distinct values, which uses `hasher` to hash values.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            data: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of distinct values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns if there are no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the sum of all counts, saturating at the bounds of [`Count`].
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_values(["a", "a", "b"]);
    /// assert_eq!(set.total(), 3);
    /// ```
    #[must_use]
    pub fn total(&self) -> Count {
        self.data
            .values()
            .fold(0, |total, count| total.saturating_add(*count))
    }

    /// Removes every value. Allocated memory is kept for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let mut set = FrequencySet::from_values([1, 2, 3]);
    /// set.clear();
    /// assert_eq!(set.values().count(), 0);
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing {} values", self.data.len());
        self.data.clear();
    }

    /// Returns an iterator over the distinct values, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_values(["foo", "bar", "foo"]);
    /// assert_eq!(set.values().collect::<Vec<_>>(), vec![&"foo", &"bar"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_, T> {
        Values(self.data.keys())
    }

    /// Returns an iterator over the values and their counts, in insertion
    /// order. Iterating over `&FrequencySet` is equivalent.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> Iter<'_, T> {
        Iter(self.data.iter())
    }

    /// Same as [`entries`].
    ///
    /// [`entries`]: Self::entries
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.entries()
    }

    /// Calls `callback` with every value, its count, and this set, in
    /// insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_values(["boo", "boo", "bar"]);
    /// let mut seen = Vec::new();
    /// set.for_each(|value, count, _| seen.push((*value, count)));
    ///
    /// assert_eq!(seen, vec![("boo", 2), ("bar", 1)]);
    /// ```
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, Count, &Self),
    {
        for (value, count) in &self.data {
            callback(value, *count, self);
        }
    }

    /// Like [`for_each`], but stops at the first error returned by `callback`
    /// and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `callback`.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_values([1, 2, 3]);
    /// let mut visited = 0;
    /// let result = set.try_for_each(|value, _, _| {
    ///     visited += 1;
    ///     if *value == 2 { Err("two") } else { Ok(()) }
    /// });
    ///
    /// assert_eq!(result, Err("two"));
    /// assert_eq!(visited, 2);
    /// ```
    ///
    /// [`for_each`]: Self::for_each
    pub fn try_for_each<F, E>(&self, mut callback: F) -> Result<(), E>
    where
        F: FnMut(&T, Count, &Self) -> Result<(), E>,
    {
        for (value, count) in &self.data {
            callback(value, *count, self)?;
        }
        Ok(())
    }
}

impl<T: Stringify, S> FrequencySet<T, S> {
    /// Returns a `(text, count)` pair for every string safe value, in
    /// insertion order.
    ///
    /// Callables and structured values are skipped. Distinct values with the
    /// same text each keep their own pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::{FrequencySet, Value};
    ///
    /// let set = FrequencySet::from_values([
    ///     Value::from("foo"),
    ///     Value::from("foo"),
    ///     Value::from("boo"),
    ///     Value::from("bar"),
    ///     Value::function("noop"),
    /// ]);
    ///
    /// assert_eq!(
    ///     set.to_json(),
    ///     vec![
    ///         (String::from("foo"), 2),
    ///         (String::from("boo"), 1),
    ///         (String::from("bar"), 1),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn to_json(&self) -> Vec<(String, Count)> {
        self.data
            .iter()
            .filter_map(|(value, count)| {
                let text = value.to_safe_string();
                if text.is_none() {
                    trace!("skipping {:?} value during serialization", value.kind());
                }
                text.map(|text| (text, *count))
            })
            .collect()
    }

    /// Serializes the output of [`to_json`] to a JSON string.
    ///
    /// # Errors
    ///
    /// Fails only if the serializer does.
    ///
    /// [`to_json`]: Self::to_json
    #[inline]
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<T: Hash + Eq, S: BuildHasher> FrequencySet<T, S> {
    /// Adds one occurrence of `value`, appending it if it is new. Returns this
    /// set so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let mut set = FrequencySet::new();
    /// set.add("boo").add("boo").add("boo");
    /// assert_eq!(set.count(&"boo"), Some(3));
    /// ```
    #[inline]
    pub fn add(&mut self, value: T) -> &mut Self {
        self.add_count(value, 1)
    }

    /// Adds `count` occurrences of `value`, appending it if it is new.
    ///
    /// Zero and negative counts are applied as is. A value whose count drops
    /// to zero or below stays in the set until it is deleted.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let mut set = FrequencySet::new();
    /// set.add_count("boo", 20).add_count("boo", -5);
    /// assert_eq!(set.count(&"boo"), Some(15));
    /// ```
    pub fn add_count(&mut self, value: T, count: Count) -> &mut Self {
        match self.data.entry(value) {
            Entry::Occupied(mut entry) => {
                let stored = entry.get_mut();
                *stored = stored.saturating_add(count);
            }
            Entry::Vacant(entry) => {
                entry.insert(count);
            }
        }
        self
    }

    /// Removes `value` entirely, whatever its count. Returns whether it was
    /// present. The order of the remaining values is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let mut set = FrequencySet::from_values(["boo", "boo"]);
    /// assert!(set.delete(&"boo"));
    /// assert!(!set.delete(&"boo"));
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.data.shift_remove(value).is_some()
    }

    /// Returns if `value` is present.
    #[inline]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.data.contains_key(value)
    }

    /// Returns the count of `value`, if it is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::FrequencySet;
    ///
    /// let set = FrequencySet::from_values([String::from("a"), String::from("a")]);
    /// assert_eq!(set.count("a"), Some(2));
    /// assert_eq!(set.count("b"), None);
    /// ```
    #[inline]
    pub fn count<Q>(&self, value: &Q) -> Option<Count>
    where
        Q: Hash + Eq + ?Sized,
        T: Borrow<Q>,
    {
        self.data.get(value).copied()
    }
}

impl FrequencySet<Value> {
    /// Builds a frequency set from a runtime-typed source.
    ///
    /// `Undefined` and `Null` yield an empty set. Arrays and strings are
    /// iterated; every element that is a two element array ending in a number
    /// seeds its first element with that count, and any other element is
    /// counted once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotIterable`] if `source` is neither nullish nor
    /// iterable, and [`Error::InvalidCount`] if a seed pair carries a count
    /// that is not an integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::{Error, FrequencySet, Value};
    ///
    /// let source = Value::array(vec![
    ///     Value::array(vec![Value::from("boo"), Value::from(5)]),
    ///     Value::from("foo"),
    /// ]);
    /// let set = FrequencySet::try_from_value(&source)?;
    /// assert_eq!(set.count(&Value::from("boo")), Some(5));
    /// assert_eq!(set.count(&Value::from("foo")), Some(1));
    ///
    /// assert!(FrequencySet::try_from_value(&Value::Null)?.is_empty());
    /// assert_eq!(
    ///     FrequencySet::try_from_value(&Value::object::<&str>([])).unwrap_err(),
    ///     Error::NotIterable
    /// );
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_from_value(source: &Value) -> Result<Self> {
        if source.is_nullish() {
            trace!("seeding from a nullish source");
            return Ok(Self::new());
        }

        let Some(elements) = source.elements() else {
            debug!("rejecting non-iterable seed source {source:?}");
            return Err(Error::NotIterable);
        };

        let mut set = Self::with_capacity(elements.len());
        for element in elements {
            match element.as_seed_pair() {
                Some((value, count)) => {
                    set.try_add(value.clone(), count)?;
                }
                None => {
                    set.add(element);
                }
            }
        }

        trace!("seeded {} distinct values", set.len());
        Ok(set)
    }
}

impl<S: BuildHasher> FrequencySet<Value, S> {
    /// Adds `count` occurrences of `value`, where `count` is runtime-typed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCount`] if `count` is not a number holding an
    /// integer. The set is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::{Error, FrequencySet, Value};
    ///
    /// let mut set = FrequencySet::<Value>::new();
    /// set.try_add(Value::from("boo"), &Value::from(2))?
    ///     .try_add(Value::from("boo"), &Value::from(3))?;
    /// assert_eq!(set.count(&Value::from("boo")), Some(5));
    ///
    /// let err = set.try_add(Value::from("boo"), &Value::object::<&str>([]));
    /// assert_eq!(err.unwrap_err(), Error::InvalidCount);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn try_add(&mut self, value: Value, count: &Value) -> Result<&mut Self> {
        let Some(count) = count.as_count() else {
            debug!("rejecting count {count:?}");
            return Err(Error::InvalidCount);
        };
        Ok(self.add_count(value, count))
    }
}

impl<T, S: Default> Default for FrequencySet<T, S> {
    #[inline]
    fn default() -> Self {
        Self {
            data: IndexMap::default(),
        }
    }
}

impl<T: Debug, S> Debug for FrequencySet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

/// Two sets are equal if they hold the same values with the same counts, in
/// any order.
impl<T: Hash + Eq, S: BuildHasher> PartialEq for FrequencySet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for FrequencySet<T, S> {}

impl<T: Hash + Eq> FromIterator<T> for FrequencySet<T> {
    /// Counts every value of the iterator.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.add(value);
        }
        set
    }
}

impl<T: Hash + Eq> FromIterator<Seed<T>> for FrequencySet<T> {
    /// Applies every seed of the iterator.
    fn from_iter<I: IntoIterator<Item = Seed<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        for seed in iter {
            let (value, count) = seed.into_parts();
            set.add_count(value, count);
        }
        set
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<T> for FrequencySet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Extend<Seed<T>> for FrequencySet<T, S> {
    fn extend<I: IntoIterator<Item = Seed<T>>>(&mut self, iter: I) {
        for seed in iter {
            let (value, count) = seed.into_parts();
            self.add_count(value, count);
        }
    }
}

impl<'a, T, S> IntoIterator for &'a FrequencySet<T, S> {
    type Item = (&'a T, Count);

    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<T, S> IntoIterator for FrequencySet<T, S> {
    type Item = (T, Count);

    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.data.into_iter())
    }
}



#[cfg(test)]
mod delete {
    use super::FrequencySet;

    #[test]
    fn present() {
        let mut set = FrequencySet::new();
        set.add("boo");
        assert!(set.has(&"boo"));

        assert!(set.delete(&"boo"));
        assert!(!set.has(&"boo"));
    }

    #[test]
    fn absent() {
        let mut set = FrequencySet::<&str>::new();
        assert!(!set.delete(&"boo"));
        assert!(set.is_empty());
    }

    #[test]
    fn removes_whole_count() {
        let mut set = FrequencySet::from_values(["boo", "boo", "boo"]);
        assert!(set.delete(&"boo"));
        assert_eq!(set.count(&"boo"), None);
        assert!(!set.delete(&"boo"));
    }

    #[test]
    fn keeps_remaining_order() {
        let mut set = FrequencySet::from_values([1, 2, 3, 4]);
        set.delete(&2);
        assert_eq!(set.values().copied().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn borrowed_lookup() {
        let mut set = FrequencySet::from_values([String::from("boo")]);
        assert!(set.has("boo"));
        assert!(set.delete("boo"));
    }
}

#[cfg(test)]
mod read {
    use super::FrequencySet;
    use crate::Value;

    #[test]
    fn unique_values_of_mixed_kinds() {
        let set = FrequencySet::from_values([
            Value::from(1),
            Value::from(2),
            Value::from("foo"),
            Value::BigInt(88),
        ]);
        assert_eq!(
            set.values().cloned().collect::<Vec<_>>(),
            vec![
                Value::from(1),
                Value::from(2),
                Value::from("foo"),
                Value::BigInt(88)
            ]
        );
    }

    #[test]
    fn clear() {
        let mut set = FrequencySet::from_values([1, 2, 3]);
        set.clear();
        assert_eq!(set.values().count(), 0);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn iterators_restart() {
        let set = FrequencySet::from_values(["a", "b"]);
        assert_eq!(set.entries().count(), 2);
        assert_eq!(set.entries().count(), 2);
        assert_eq!(
            (&set).into_iter().collect::<Vec<_>>(),
            set.entries().collect::<Vec<_>>()
        );
    }

    #[test]
    fn for_each_visits_in_order() {
        let set = FrequencySet::from_values(["boo", "boo", "bar"]);
        let mut seen = Vec::new();
        set.for_each(|value, count, this| {
            assert_eq!(this.len(), 2);
            seen.push((*value, count));
        });
        assert_eq!(seen, vec![("boo", 2), ("bar", 1)]);
    }

    #[test]
    fn try_for_each_stops_on_error() {
        let set = FrequencySet::from_values(["a", "b", "c"]);
        let mut seen = Vec::new();
        let result = set.try_for_each(|value, _, _| {
            seen.push(*value);
            if *value == "b" {
                Err(())
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err(()));
        assert_eq!(seen, vec!["a", "b"]);
    }

    #[test]
    fn totals() {
        let set = FrequencySet::from_pairs([("a", 3), ("b", 4)]);
        assert_eq!(set.total(), 7);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_lists_entries() {
        let set = FrequencySet::from_values(["a", "a"]);
        assert_eq!(format!("{set:?}"), r#"{"a": 2}"#);
    }
}
