//! The `TypedValue` sum type carried by an envelope.
//!
//! There is one variant per built-in kind, plus `Nil` for an absent value
//! and `Json` for payloads produced or consumed by override codecs.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use crate::codec::scalar::Scalar;
use crate::complex::{Complex128, Complex64};
use crate::grammar;
use crate::tag::Kind;

/// A value whose concrete type is one of the built-in kinds.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TypedValue {
    /// No value. List kinds encode it as the empty string.
    #[default]
    Nil,
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint(usize),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Str(String),
    Bool(bool),
    DateTime(DateTime<FixedOffset>),
    Duration(TimeDelta),
    Complex64(Complex64),
    Complex128(Complex128),
    IntList(Vec<isize>),
    Int8List(Vec<i8>),
    Int16List(Vec<i16>),
    Int32List(Vec<i32>),
    Int64List(Vec<i64>),
    UintList(Vec<usize>),
    Uint8List(Vec<u8>),
    Uint16List(Vec<u16>),
    Uint32List(Vec<u32>),
    Uint64List(Vec<u64>),
    Float32List(Vec<f32>),
    Float64List(Vec<f64>),
    StrList(Vec<String>),
    BoolList(Vec<bool>),
    DateTimeList(Vec<DateTime<FixedOffset>>),
    DurationList(Vec<TimeDelta>),
    Complex64List(Vec<Complex64>),
    Complex128List(Vec<Complex128>),
    /// Arbitrary JSON, for tags served by override codecs.
    Json(serde_json::Value),
}

impl TypedValue {
    /// The built-in kind of this value; `None` for `Nil` and `Json`.
    pub fn kind(&self) -> Option<Kind> {
        Some(match self {
            TypedValue::Nil | TypedValue::Json(_) => return None,
            TypedValue::Int(_) => Kind::Int,
            TypedValue::Int8(_) => Kind::Int8,
            TypedValue::Int16(_) => Kind::Int16,
            TypedValue::Int32(_) => Kind::Int32,
            TypedValue::Int64(_) => Kind::Int64,
            TypedValue::Uint(_) => Kind::Uint,
            TypedValue::Uint8(_) => Kind::Uint8,
            TypedValue::Uint16(_) => Kind::Uint16,
            TypedValue::Uint32(_) => Kind::Uint32,
            TypedValue::Uint64(_) => Kind::Uint64,
            TypedValue::Float32(_) => Kind::Float32,
            TypedValue::Float64(_) => Kind::Float64,
            TypedValue::Str(_) => Kind::Str,
            TypedValue::Bool(_) => Kind::Bool,
            TypedValue::DateTime(_) => Kind::DateTime,
            TypedValue::Duration(_) => Kind::Duration,
            TypedValue::Complex64(_) => Kind::Complex64,
            TypedValue::Complex128(_) => Kind::Complex128,
            TypedValue::IntList(_) => Kind::IntList,
            TypedValue::Int8List(_) => Kind::Int8List,
            TypedValue::Int16List(_) => Kind::Int16List,
            TypedValue::Int32List(_) => Kind::Int32List,
            TypedValue::Int64List(_) => Kind::Int64List,
            TypedValue::UintList(_) => Kind::UintList,
            TypedValue::Uint8List(_) => Kind::Uint8List,
            TypedValue::Uint16List(_) => Kind::Uint16List,
            TypedValue::Uint32List(_) => Kind::Uint32List,
            TypedValue::Uint64List(_) => Kind::Uint64List,
            TypedValue::Float32List(_) => Kind::Float32List,
            TypedValue::Float64List(_) => Kind::Float64List,
            TypedValue::StrList(_) => Kind::StrList,
            TypedValue::BoolList(_) => Kind::BoolList,
            TypedValue::DateTimeList(_) => Kind::DateTimeList,
            TypedValue::DurationList(_) => Kind::DurationList,
            TypedValue::Complex64List(_) => Kind::Complex64List,
            TypedValue::Complex128List(_) => Kind::Complex128List,
        })
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, TypedValue::Nil)
    }

    /// Borrows the scalar of type `T`, if this value holds exactly one.
    ///
    /// ```
    /// use typed_json::TypedValue;
    ///
    /// let value = TypedValue::from(4i8);
    /// assert_eq!(value.as_scalar::<i8>(), Some(&4));
    /// assert_eq!(value.as_scalar::<i16>(), None);
    /// ```
    pub fn as_scalar<T: Scalar>(&self) -> Option<&T> {
        T::scalar_ref(self)
    }

    /// Borrows the list of `T`, if this value holds exactly one.
    pub fn as_list<T: Scalar>(&self) -> Option<&[T]> {
        T::list_ref(self)
    }

    /// Borrows the JSON payload of a `Json` value.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            TypedValue::Json(value) => Some(value),
            _ => None,
        }
    }
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    f.write_str("[")?;
    for (index, value) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        item(f, value)?;
    }
    f.write_str("]")
}

/// Renders the value for error messages: scalars in their canonical text
/// (strings verbatim), lists as `[a, b]`, `Nil` as `<nil>`.
impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Nil => f.write_str("<nil>"),
            TypedValue::Int(v) => write!(f, "{v}"),
            TypedValue::Int8(v) => write!(f, "{v}"),
            TypedValue::Int16(v) => write!(f, "{v}"),
            TypedValue::Int32(v) => write!(f, "{v}"),
            TypedValue::Int64(v) => write!(f, "{v}"),
            TypedValue::Uint(v) => write!(f, "{v}"),
            TypedValue::Uint8(v) => write!(f, "{v}"),
            TypedValue::Uint16(v) => write!(f, "{v}"),
            TypedValue::Uint32(v) => write!(f, "{v}"),
            TypedValue::Uint64(v) => write!(f, "{v}"),
            TypedValue::Float32(v) => f.write_str(&grammar::format_f32(*v)),
            TypedValue::Float64(v) => f.write_str(&grammar::format_f64(*v)),
            TypedValue::Str(v) => f.write_str(v),
            TypedValue::Bool(v) => f.write_str(grammar::format_bool(*v)),
            TypedValue::DateTime(v) => f.write_str(&grammar::format_datetime(v)),
            TypedValue::Duration(v) => f.write_str(&grammar::format_duration(*v)),
            TypedValue::Complex64(v) => write!(f, "{v}"),
            TypedValue::Complex128(v) => write!(f, "{v}"),
            TypedValue::IntList(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Int8List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Int16List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Int32List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Int64List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::UintList(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Uint8List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Uint16List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Uint32List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Uint64List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Float32List(v) => {
                write_list(f, v, |f, x| f.write_str(&grammar::format_f32(*x)))
            }
            TypedValue::Float64List(v) => {
                write_list(f, v, |f, x| f.write_str(&grammar::format_f64(*x)))
            }
            TypedValue::StrList(v) => write_list(f, v, |f, x| write!(f, "{x:?}")),
            TypedValue::BoolList(v) => {
                write_list(f, v, |f, x| f.write_str(grammar::format_bool(*x)))
            }
            TypedValue::DateTimeList(v) => {
                write_list(f, v, |f, x| f.write_str(&grammar::format_datetime(x)))
            }
            TypedValue::DurationList(v) => {
                write_list(f, v, |f, x| f.write_str(&grammar::format_duration(*x)))
            }
            TypedValue::Complex64List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Complex128List(v) => write_list(f, v, |f, x| write!(f, "{x}")),
            TypedValue::Json(v) => write!(f, "{v}"),
        }
    }
}

impl<T: Into<TypedValue>> From<Option<T>> for TypedValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(TypedValue::Nil, Into::into)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::Str(value.to_string())
    }
}

impl From<Vec<&str>> for TypedValue {
    fn from(values: Vec<&str>) -> Self {
        TypedValue::StrList(values.into_iter().map(str::to_string).collect())
    }
}

impl From<DateTime<Utc>> for TypedValue {
    fn from(value: DateTime<Utc>) -> Self {
        TypedValue::DateTime(value.fixed_offset())
    }
}

impl From<serde_json::Value> for TypedValue {
    fn from(value: serde_json::Value) -> Self {
        TypedValue::Json(value)
    }
}
