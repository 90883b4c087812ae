//! Classification of values into what can and cannot be written out as plain
//! text by [`FrequencySet::to_json`].
//!
//! [`FrequencySet::to_json`]: crate::FrequencySet::to_json

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// The broad kind of a value, as far as serialization is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Numbers, strings, booleans, null-likes. These have a faithful textual
    /// form.
    Primitive,
    /// Something that can be invoked. Its text would not identify it.
    Callable,
    /// A compound value such as an object or array.
    Structured,
}

impl Kind {
    /// Returns if values of this kind are written out by
    /// [`FrequencySet::to_json`].
    ///
    /// [`FrequencySet::to_json`]: crate::FrequencySet::to_json
    #[inline]
    #[must_use]
    pub const fn is_string_safe(self) -> bool {
        matches!(self, Self::Primitive)
    }
}

/// Values that can be converted to canonical text.
///
/// Implementors that are not primitives should override [`kind`] so that
/// they are skipped during serialization; [`stringify`] is never called for
/// them by this crate.
///
/// # Examples
///
/// ```
/// use frequency_set::{Kind, Stringify};
///
/// struct Callback;
///
/// impl Stringify for Callback {
///     fn kind(&self) -> Kind {
///         Kind::Callable
///     }
///
///     fn stringify(&self) -> String {
///         String::from("[function]")
///     }
/// }
///
/// assert!(!Callback.kind().is_string_safe());
/// assert_eq!(Some(3).stringify(), "3");
/// assert_eq!(None::<u8>.stringify(), "null");
/// ```
///
/// [`kind`]: Self::kind
/// [`stringify`]: Self::stringify
pub trait Stringify {
    /// Returns the kind of this value. Defaults to [`Kind::Primitive`].
    #[inline]
    fn kind(&self) -> Kind {
        Kind::Primitive
    }

    /// Returns the canonical textual form of this value.
    fn stringify(&self) -> String;

    /// Returns the text of this value, if it is string safe.
    #[inline]
    fn to_safe_string(&self) -> Option<String> {
        self.kind().is_string_safe().then(|| self.stringify())
    }
}

impl Stringify for str {
    #[inline]
    fn stringify(&self) -> String {
        self.to_owned()
    }
}

impl Stringify for String {
    #[inline]
    fn stringify(&self) -> String {
        self.clone()
    }
}

impl Stringify for Cow<'_, str> {
    #[inline]
    fn stringify(&self) -> String {
        self.clone().into_owned()
    }
}

impl Stringify for char {
    #[inline]
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl Stringify for bool {
    #[inline]
    fn stringify(&self) -> String {
        self.to_string()
    }
}

/// The unit type stands in for an undefined value.
impl Stringify for () {
    #[inline]
    fn stringify(&self) -> String {
        String::from("undefined")
    }
}

macro_rules! stringify_integers {
    ($($ty:ty),*) => {
        $(
            impl Stringify for $ty {
                #[inline]
                fn stringify(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

stringify_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Stringify for f64 {
    #[inline]
    fn stringify(&self) -> String {
        number_to_string(*self)
    }
}

impl Stringify for f32 {
    #[inline]
    fn stringify(&self) -> String {
        number_to_string(f64::from(*self))
    }
}

/// `None` is the null value.
impl<T: Stringify> Stringify for Option<T> {
    #[inline]
    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Primitive, |value| value.kind())
    }

    #[inline]
    fn stringify(&self) -> String {
        self.as_ref()
            .map_or_else(|| String::from("null"), |value| value.stringify())
    }
}

macro_rules! stringify_pointers {
    ($($ptr:ident),*) => {
        $(
            impl<T: Stringify + ?Sized> Stringify for $ptr<T> {
                #[inline]
                fn kind(&self) -> Kind {
                    (**self).kind()
                }

                #[inline]
                fn stringify(&self) -> String {
                    (**self).stringify()
                }
            }
        )*
    };
}

stringify_pointers!(Box, Rc, Arc);

impl<T: Stringify + ?Sized> Stringify for &T {
    #[inline]
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    #[inline]
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

/// Formats a float the way a loosely typed host prints its numbers: integral
/// values without a fractional part, named non-finite values, and exponent
/// notation for magnitudes of at least 1e21 or below 1e-6.
pub(crate) fn number_to_string(number: f64) -> String {
    if number.is_nan() {
        String::from("NaN")
    } else if number.is_infinite() {
        if number.is_sign_positive() {
            String::from("Infinity")
        } else {
            String::from("-Infinity")
        }
    } else if number == 0.0 {
        // Negative zero prints without its sign.
        String::from("0")
    } else if !(1e-6..1e21).contains(&number.abs()) {
        let text = format!("{number:e}");
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        }
    } else {
        number.to_string()
    }
}
