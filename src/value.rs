//! A loosely typed value, for callers that need to seed or update a frequency
//! set from input whose shape is only known at runtime.

use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use ordered_float::OrderedFloat;

use crate::stringify::{number_to_string, Kind, Stringify};
use crate::Count;

/// A shared, reference-counted pointer that compares and hashes by identity.
///
/// Two handles are equal only if they point to the same allocation, no matter
/// what they contain.
///
/// # Examples
///
/// ```
/// use frequency_set::Handle;
///
/// let a = Handle::new(vec![1, 2]);
/// let b = Handle::new(vec![1, 2]);
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// ```
pub struct Handle<T: ?Sized>(Rc<T>);

impl<T> Handle<T> {
    /// Allocates a new handle owning `value`.
    #[inline]
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> Handle<T> {
    #[inline]
    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast::<()>()
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for Handle<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> Eq for Handle<T> {}

impl<T: ?Sized> Hash for Handle<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<T: ?Sized> std::ops::Deref for Handle<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Rc<T>> for Handle<T> {
    #[inline]
    fn from(rc: Rc<T>) -> Self {
        Self(rc)
    }
}

impl<T> From<Vec<T>> for Handle<[T]> {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Self(values.into())
    }
}

impl From<&str> for Handle<str> {
    #[inline]
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl<T: Debug + ?Sized> Debug for Handle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} @ {:p}", &*self.0, self.addr())
    }
}

/// A runtime-typed value.
///
/// Primitives compare by value. Numbers compare with `NaN` equal to itself
/// and both zeros equal. Arrays, objects, and functions compare by identity,
/// so two separately built empty arrays are distinct.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// The null value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A double precision number.
    Number(OrderedFloat<f64>),
    /// An arbitrary precision integer, bounded here to 128 bits.
    BigInt(i128),
    /// A string.
    String(Rc<str>),
    /// An ordered list of values.
    Array(Handle<[Value]>),
    /// A list of named properties.
    Object(Handle<[(Rc<str>, Value)]>),
    /// A callable, carrying its name.
    Function(Handle<str>),
}

impl Value {
    /// Builds a number value.
    #[inline]
    #[must_use]
    pub const fn number(number: f64) -> Self {
        Self::Number(OrderedFloat(number))
    }

    /// Builds a string value.
    #[inline]
    #[must_use]
    pub fn string(text: &str) -> Self {
        Self::String(text.into())
    }

    /// Builds a fresh array, distinct from every other array.
    #[inline]
    #[must_use]
    pub fn array(values: Vec<Self>) -> Self {
        Self::Array(values.into())
    }

    /// Builds a fresh object, distinct from every other object.
    #[must_use]
    pub fn object<K: Into<Rc<str>>>(properties: impl IntoIterator<Item = (K, Self)>) -> Self {
        let properties: Vec<_> = properties
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        Self::Object(properties.into())
    }

    /// Builds a fresh function, distinct from every other function.
    #[inline]
    #[must_use]
    pub fn function(name: &str) -> Self {
        Self::Function(name.into())
    }

    /// Returns if this value can be walked as a sequence of values.
    ///
    /// Only arrays and strings are iterable.
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::Value;
    ///
    /// assert!(Value::array(vec![]).is_iterable());
    /// assert!(Value::string("abc").is_iterable());
    /// assert!(!Value::object::<&str>([]).is_iterable());
    /// assert!(!Value::Null.is_iterable());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_iterable(&self) -> bool {
        matches!(self, Self::Array(_) | Self::String(_))
    }

    /// Returns if this is `Undefined` or `Null`.
    #[inline]
    #[must_use]
    pub const fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Interprets this value as an occurrence count.
    ///
    /// Every number is a count. Fractions are truncated toward zero, values
    /// beyond the range of [`Count`] (infinities included) saturate at its
    /// bounds, and `NaN` counts as zero. Anything that is not a number yields
    /// [`None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use frequency_set::Value;
    ///
    /// assert_eq!(Value::number(5.0).as_count(), Some(5));
    /// assert_eq!(Value::number(-2.0).as_count(), Some(-2));
    /// assert_eq!(Value::number(1.5).as_count(), Some(1));
    /// assert_eq!(Value::string("5").as_count(), None);
    /// ```
    #[must_use]
    // Float to int `as` casts truncate and saturate, and map NaN to zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_count(&self) -> Option<Count> {
        match self {
            Self::Number(OrderedFloat(number)) => Some(*number as Count),
            _ => None,
        }
    }

    /// Returns the elements this value yields when iterated, or [`None`] if it
    /// is not iterable. Strings yield one string value per character.
    pub(crate) fn elements(&self) -> Option<Vec<Self>> {
        match self {
            Self::Array(values) => Some(values.to_vec()),
            Self::String(text) => Some(
                text.chars()
                    .map(|c| Self::String(c.to_string().into()))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Splits a two element array whose second element is a number into a
    /// value and its raw count.
    pub(crate) fn as_seed_pair(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Array(values) => match &**values {
                [value, count @ Self::Number(_)] => Some((value, count)),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for Value {
    #[inline]
    fn default() -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<i128> for Value {
    #[inline]
    fn from(value: i128) -> Self {
        Self::BigInt(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Null`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Stringify for Value {
    fn kind(&self) -> Kind {
        match self {
            Self::Function(_) => Kind::Callable,
            Self::Array(_) | Self::Object(_) => Kind::Structured,
            _ => Kind::Primitive,
        }
    }

    fn stringify(&self) -> String {
        match self {
            Self::Undefined => String::from("undefined"),
            Self::Null => String::from("null"),
            Self::Bool(value) => value.to_string(),
            Self::Number(OrderedFloat(number)) => number_to_string(*number),
            Self::BigInt(value) => value.to_string(),
            Self::String(text) => text.to_string(),
            // The arms below only serve direct callers; `to_json` skips
            // structured and callable values before stringifying.
            Self::Array(values) => values
                .iter()
                .map(|value| {
                    if value.is_nullish() {
                        String::new()
                    } else {
                        value.stringify()
                    }
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Object(_) => String::from("[object Object]"),
            Self::Function(name) => format!("function {}() {{}}", &**name),
        }
    }
}

#[cfg(test)]
mod equality {
    use std::collections::HashSet;

    use super::Value;

    #[test]
    fn primitives_compare_by_value() {
        assert_eq!(Value::string("foo"), Value::string("foo"));
        assert_eq!(Value::number(1.0), Value::from(1));
        assert_ne!(Value::number(1.0), Value::BigInt(1));
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn numbers_use_same_value_zero() {
        assert_eq!(Value::number(f64::NAN), Value::number(f64::NAN));
        assert_eq!(Value::number(0.0), Value::number(-0.0));

        let set: HashSet<_> = [Value::number(0.0), Value::number(-0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn compounds_compare_by_identity() {
        let a = Value::array(vec![]);
        let b = Value::array(vec![]);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);

        let f = Value::function("f");
        assert_ne!(f, Value::function("f"));
        assert_ne!(Value::object::<&str>([]), Value::object::<&str>([]));
    }
}
