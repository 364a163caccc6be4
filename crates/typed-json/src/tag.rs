//! Type registry: the closed set of built-in kinds and the open [`TypeTag`].
//!
//! A [`TypeTag`] is what travels on the wire. Built-in tags map onto a
//! [`Kind`]; any other tag is only meaningful to an override codec table.

use std::borrow::{Borrow, Cow};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator naming the type a canonical string was produced from.
///
/// Tags are stable strings (`"_int8"`, `"_duration_array"`, ...). The
/// associated constants cover every built-in kind; arbitrary tags can be
/// created with [`TypeTag::new`] for use with override codecs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(Cow<'static, str>);

macro_rules! kinds {
    ($($variant:ident => $konst:ident, $name:literal, $type_name:literal;)*) => {
        /// A built-in type kind.
        ///
        /// Every scalar kind has a list counterpart; see [`Kind::list`] and
        /// [`Kind::element`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Kind {
            $($variant,)*
        }

        impl Kind {
            /// Every built-in kind, scalars first.
            pub const ALL: &'static [Kind] = &[$(Kind::$variant,)*];

            /// The stable wire name of this kind.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Kind::$variant => $name,)*
                }
            }

            /// Human-readable type name used in error messages.
            pub const fn type_name(self) -> &'static str {
                match self {
                    $(Kind::$variant => $type_name,)*
                }
            }

            /// Looks up a built-in kind by its wire name.
            pub fn from_name(name: &str) -> Option<Kind> {
                match name {
                    $($name => Some(Kind::$variant),)*
                    _ => None,
                }
            }
        }

        impl TypeTag {
            $(
                #[doc = concat!("The built-in `", $name, "` tag.")]
                pub const $konst: TypeTag = TypeTag(Cow::Borrowed($name));
            )*
        }
    };
}

kinds! {
    Int => INT, "_int", "int";
    Int8 => INT8, "_int8", "int8";
    Int16 => INT16, "_int16", "int16";
    Int32 => INT32, "_int32", "int32";
    Int64 => INT64, "_int64", "int64";
    Uint => UINT, "_uint", "uint";
    Uint8 => UINT8, "_uint8", "uint8";
    Uint16 => UINT16, "_uint16", "uint16";
    Uint32 => UINT32, "_uint32", "uint32";
    Uint64 => UINT64, "_uint64", "uint64";
    Float32 => FLOAT32, "_float32", "float32";
    Float64 => FLOAT64, "_float64", "float64";
    Str => STRING, "_string", "string";
    Bool => BOOL, "_bool", "bool";
    DateTime => DATETIME, "_datetime", "datetime";
    Duration => DURATION, "_duration", "time duration";
    Complex64 => COMPLEX64, "_complex64", "complex64";
    Complex128 => COMPLEX128, "_complex128", "complex128";

    IntList => INT_LIST, "_int_array", "int list";
    Int8List => INT8_LIST, "_int8_array", "int8 list";
    Int16List => INT16_LIST, "_int16_array", "int16 list";
    Int32List => INT32_LIST, "_int32_array", "int32 list";
    Int64List => INT64_LIST, "_int64_array", "int64 list";
    UintList => UINT_LIST, "_uint_array", "uint list";
    Uint8List => UINT8_LIST, "_uint8_array", "uint8 list";
    Uint16List => UINT16_LIST, "_uint16_array", "uint16 list";
    Uint32List => UINT32_LIST, "_uint32_array", "uint32 list";
    Uint64List => UINT64_LIST, "_uint64_array", "uint64 list";
    Float32List => FLOAT32_LIST, "_float32_array", "float32 list";
    Float64List => FLOAT64_LIST, "_float64_array", "float64 list";
    StrList => STRING_LIST, "_string_array", "string list";
    BoolList => BOOL_LIST, "_bool_array", "bool list";
    DateTimeList => DATETIME_LIST, "_datetime_array", "datetime list";
    DurationList => DURATION_LIST, "_duration_array", "time duration list";
    Complex64List => COMPLEX64_LIST, "_complex64_array", "complex64 list";
    Complex128List => COMPLEX128_LIST, "_complex128_array", "complex128 list";
}

impl Kind {
    /// Returns the tag carrying this kind's wire name.
    pub const fn tag(self) -> TypeTag {
        TypeTag(Cow::Borrowed(self.name()))
    }

    /// Returns `true` for the list-valued kinds.
    pub const fn is_list(self) -> bool {
        self.element().is_some()
    }

    /// For a list kind, the kind of its elements.
    pub const fn element(self) -> Option<Kind> {
        Some(match self {
            Kind::IntList => Kind::Int,
            Kind::Int8List => Kind::Int8,
            Kind::Int16List => Kind::Int16,
            Kind::Int32List => Kind::Int32,
            Kind::Int64List => Kind::Int64,
            Kind::UintList => Kind::Uint,
            Kind::Uint8List => Kind::Uint8,
            Kind::Uint16List => Kind::Uint16,
            Kind::Uint32List => Kind::Uint32,
            Kind::Uint64List => Kind::Uint64,
            Kind::Float32List => Kind::Float32,
            Kind::Float64List => Kind::Float64,
            Kind::StrList => Kind::Str,
            Kind::BoolList => Kind::Bool,
            Kind::DateTimeList => Kind::DateTime,
            Kind::DurationList => Kind::Duration,
            Kind::Complex64List => Kind::Complex64,
            Kind::Complex128List => Kind::Complex128,
            _ => return None,
        })
    }

    /// For a scalar kind, the kind of a list of it.
    pub const fn list(self) -> Option<Kind> {
        Some(match self {
            Kind::Int => Kind::IntList,
            Kind::Int8 => Kind::Int8List,
            Kind::Int16 => Kind::Int16List,
            Kind::Int32 => Kind::Int32List,
            Kind::Int64 => Kind::Int64List,
            Kind::Uint => Kind::UintList,
            Kind::Uint8 => Kind::Uint8List,
            Kind::Uint16 => Kind::Uint16List,
            Kind::Uint32 => Kind::Uint32List,
            Kind::Uint64 => Kind::Uint64List,
            Kind::Float32 => Kind::Float32List,
            Kind::Float64 => Kind::Float64List,
            Kind::Str => Kind::StrList,
            Kind::Bool => Kind::BoolList,
            Kind::DateTime => Kind::DateTimeList,
            Kind::Duration => Kind::DurationList,
            Kind::Complex64 => Kind::Complex64List,
            Kind::Complex128 => Kind::Complex128List,
            _ => return None,
        })
    }

    /// Indefinite article for [`Kind::type_name`] ("an int8", "a bool").
    pub fn article(self) -> &'static str {
        if self.type_name().starts_with("int") {
            "an"
        } else {
            "a"
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.article(), self.type_name())
    }
}

impl TypeTag {
    /// Creates a tag from any string. Built-in names resolve to their kind.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in kind this tag names, if any.
    pub fn kind(&self) -> Option<Kind> {
        Kind::from_name(&self.0)
    }

    /// Returns `true` if the built-in codec table can handle this tag.
    ///
    /// ```
    /// use typed_json::TypeTag;
    ///
    /// assert!(TypeTag::INT8.is_recognized());
    /// assert!(!TypeTag::new("money").is_recognized());
    /// ```
    pub fn is_recognized(&self) -> bool {
        self.kind().is_some()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TypeTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<Kind> for TypeTag {
    fn from(kind: Kind) -> Self {
        kind.tag()
    }
}

impl From<&'static str> for TypeTag {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
