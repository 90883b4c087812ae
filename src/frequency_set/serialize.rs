use std::fmt::Formatter;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::stringify::Stringify;
use crate::Count;

use super::FrequencySet;

/// Writes the same pairs as [`FrequencySet::to_json`], as a sequence of
/// `[text, count]` tuples.
impl<T: Stringify, S> Serialize for FrequencySet<T, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for (value, count) in self {
            if let Some(text) = value.to_safe_string() {
                seq.serialize_element(&(text, count))?;
            }
        }
        seq.end()
    }
}

/// Reads a sequence of `[value, count]` tuples, accumulating repeated values.
impl<'de, T, S> Deserialize<'de> for FrequencySet<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PairsVisitor(PhantomData))
    }
}

struct PairsVisitor<T, S>(PhantomData<fn() -> FrequencySet<T, S>>);

impl<'de, T, S> Visitor<'de> for PairsVisitor<T, S>
where
    T: Deserialize<'de> + Hash + Eq,
    S: BuildHasher + Default,
{
    type Value = FrequencySet<T, S>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("a sequence of [value, count] pairs")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // Don't trust the hint too far.
        let capacity = seq.size_hint().unwrap_or(0).min(4096);
        let mut set = FrequencySet::with_capacity_and_hasher(capacity, S::default());
        while let Some((value, count)) = seq.next_element::<(T, Count)>()? {
            set.add_count(value, count);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use crate::{FrequencySet, Value};

    #[test]
    fn serializes_pairs() {
        let set = FrequencySet::from_values([
            Value::from("foo"),
            Value::from("foo"),
            Value::function("noop"),
            Value::Null,
        ]);
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!([["foo", 2], ["null", 1]]));
    }

    #[test]
    fn empty_set_is_empty_array() {
        let set = FrequencySet::<u8>::new();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    }

    #[test]
    fn round_trips_strings() {
        let set = FrequencySet::from_pairs([(String::from("boo"), 5), (String::from("foo"), 2)]);
        let json = serde_json::to_string(&set).unwrap();
        let back: FrequencySet<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(
            back.entries().collect::<Vec<_>>(),
            set.entries().collect::<Vec<_>>()
        );
    }

    #[test]
    fn deserializing_accumulates() {
        let set: FrequencySet<u32> = serde_json::from_str("[[1, 2], [3, 1], [1, 5]]").unwrap();
        assert_eq!(set.entries().collect::<Vec<_>>(), vec![(&1, 7), (&3, 1)]);
    }

    #[test]
    fn rejects_bare_values() {
        assert!(serde_json::from_str::<FrequencySet<String>>(r#"["foo"]"#).is_err());
        assert!(serde_json::from_str::<FrequencySet<String>>("{}").is_err());
    }
}
