//! Scalar codecs: one canonical grammar per built-in element type.

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, FixedOffset, TimeDelta};

use crate::complex::{Complex128, Complex64};
use crate::error::{Result, TypedJsonError};
use crate::grammar;
use crate::tag::{Kind, TypeTag};
use crate::value::TypedValue;

mod sealed {
    pub trait Sealed {}
}

/// A Rust type that is the element type of a built-in kind.
///
/// The trait ties the type to its scalar and list [`Kind`], to the matching
/// [`TypedValue`] variants, and to its canonical text. It is sealed; the
/// implementors are the integer and float primitives, `bool`, `String`,
/// `DateTime<FixedOffset>`, `TimeDelta`, [`Complex64`] and [`Complex128`].
pub trait Scalar: sealed::Sealed + Sized + Clone {
    const KIND: Kind;
    const LIST_KIND: Kind;

    #[doc(hidden)]
    fn scalar_ref(value: &TypedValue) -> Option<&Self>;
    #[doc(hidden)]
    fn list_ref(value: &TypedValue) -> Option<&[Self]>;
    #[doc(hidden)]
    fn into_scalar(self) -> TypedValue;
    #[doc(hidden)]
    fn into_list(values: Vec<Self>) -> TypedValue;

    /// Canonical text of a standalone scalar.
    fn format(&self) -> String;

    /// Parses canonical text; `None` when the text is not in the grammar.
    fn parse(text: &str) -> Option<Self>;

    /// Returns `false` for values whose canonical text would not decode back
    /// to the same value. Encoding such a value fails.
    fn is_representable(&self) -> bool {
        true
    }

    /// Text of this value as a list element. Must never contain a comma.
    fn format_element(&self) -> String {
        self.format()
    }

    /// Parses one list element.
    fn parse_element(text: &str) -> Result<Self> {
        Self::parse(text)
            .ok_or_else(|| TypedJsonError::parse(Self::LIST_KIND.tag(), Self::KIND, text))
    }
}

macro_rules! scalar {
    (
        $ty:ty, $kind:ident, $list:ident;
        |$v:ident| $format:expr;
        |$t:ident| $parse:expr;
        |$r:ident| $representable:expr
    ) => {
        impl sealed::Sealed for $ty {}

        impl Scalar for $ty {
            const KIND: Kind = Kind::$kind;
            const LIST_KIND: Kind = Kind::$list;

            fn scalar_ref(value: &TypedValue) -> Option<&Self> {
                match value {
                    TypedValue::$kind(v) => Some(v),
                    _ => None,
                }
            }

            fn list_ref(value: &TypedValue) -> Option<&[Self]> {
                match value {
                    TypedValue::$list(v) => Some(v),
                    _ => None,
                }
            }

            fn into_scalar(self) -> TypedValue {
                TypedValue::$kind(self)
            }

            fn into_list(values: Vec<Self>) -> TypedValue {
                TypedValue::$list(values)
            }

            fn format(&self) -> String {
                let $v = self;
                $format
            }

            fn parse(text: &str) -> Option<Self> {
                let $t = text;
                $parse
            }

            fn is_representable(&self) -> bool {
                let $r = self;
                $representable
            }
        }

        from_scalar!($ty);
    };
    ($ty:ty, $kind:ident, $list:ident; |$v:ident| $format:expr; |$t:ident| $parse:expr) => {
        scalar!($ty, $kind, $list; |$v| $format; |$t| $parse; |_value| true);
    };
}

macro_rules! from_scalar {
    ($ty:ty) => {
        impl From<$ty> for TypedValue {
            fn from(value: $ty) -> Self {
                <$ty as Scalar>::into_scalar(value)
            }
        }

        impl From<Vec<$ty>> for TypedValue {
            fn from(values: Vec<$ty>) -> Self {
                <$ty as Scalar>::into_list(values)
            }
        }
    };
}

macro_rules! integers {
    ($parse:ident => $($ty:ty => $kind:ident, $list:ident;)*) => {
        $(scalar!($ty, $kind, $list; |v| v.to_string(); |t| $parse(t));)*
    };
}

fn parse_signed<T: FromStr>(text: &str) -> Option<T> {
    text.parse().ok()
}

// Unsigned text carries no sign at all.
fn parse_unsigned<T: FromStr>(text: &str) -> Option<T> {
    if text.starts_with('+') {
        return None;
    }
    text.parse().ok()
}

integers! { parse_signed =>
    isize => Int, IntList;
    i8 => Int8, Int8List;
    i16 => Int16, Int16List;
    i32 => Int32, Int32List;
    i64 => Int64, Int64List;
}

integers! { parse_unsigned =>
    usize => Uint, UintList;
    u8 => Uint8, Uint8List;
    u16 => Uint16, Uint16List;
    u32 => Uint32, Uint32List;
    u64 => Uint64, Uint64List;
}

scalar!(f32, Float32, Float32List; |v| grammar::format_f32(*v); |t| grammar::parse_f32(t));
scalar!(f64, Float64, Float64List; |v| grammar::format_f64(*v); |t| grammar::parse_f64(t));
scalar!(bool, Bool, BoolList; |v| grammar::format_bool(*v).to_string(); |t| grammar::parse_bool(t));
scalar!(
    DateTime<FixedOffset>, DateTime, DateTimeList;
    |v| grammar::format_datetime(v);
    |t| grammar::parse_datetime(t);
    |v| grammar::datetime_is_representable(v)
);
scalar!(
    TimeDelta, Duration, DurationList;
    |v| grammar::format_duration(*v);
    |t| grammar::parse_duration(t)
);
scalar!(
    Complex64, Complex64, Complex64List;
    |v| grammar::format_complex64(*v);
    |t| grammar::parse_complex64(t)
);
scalar!(
    Complex128, Complex128, Complex128List;
    |v| grammar::format_complex128(*v);
    |t| grammar::parse_complex128(t)
);

// Strings are stored verbatim as scalars but base64-encoded as list
// elements, so that commas inside them survive the join.
impl sealed::Sealed for String {}

impl Scalar for String {
    const KIND: Kind = Kind::Str;
    const LIST_KIND: Kind = Kind::StrList;

    fn scalar_ref(value: &TypedValue) -> Option<&Self> {
        match value {
            TypedValue::Str(v) => Some(v),
            _ => None,
        }
    }

    fn list_ref(value: &TypedValue) -> Option<&[Self]> {
        match value {
            TypedValue::StrList(v) => Some(v),
            _ => None,
        }
    }

    fn into_scalar(self) -> TypedValue {
        TypedValue::Str(self)
    }

    fn into_list(values: Vec<Self>) -> TypedValue {
        TypedValue::StrList(values)
    }

    fn format(&self) -> String {
        self.clone()
    }

    fn parse(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn format_element(&self) -> String {
        STANDARD.encode(self.as_bytes())
    }

    fn parse_element(text: &str) -> Result<Self> {
        STANDARD
            .decode(text)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or_else(|| TypedJsonError::InvalidBase64 {
                tag: TypeTag::STRING_LIST,
                text: text.to_string(),
            })
    }
}

from_scalar!(String);

/// Encodes a standalone scalar of type `T`.
pub(crate) fn encode_scalar<T: Scalar>(value: &TypedValue) -> Result<String> {
    let scalar = T::scalar_ref(value).ok_or_else(|| TypedJsonError::mismatch(T::KIND, value))?;
    if !scalar.is_representable() {
        return Err(TypedJsonError::out_of_range(T::KIND.tag(), T::KIND, value));
    }
    Ok(scalar.format())
}

/// Decodes a standalone scalar of type `T`.
pub(crate) fn decode_scalar<T: Scalar>(text: &str) -> Result<TypedValue> {
    T::parse(text)
        .map(T::into_scalar)
        .ok_or_else(|| TypedJsonError::parse(T::KIND.tag(), T::KIND, text))
}
