//! The built-in codec for every [`Kind`].

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeDelta};

use super::aggregate::{decode_list, encode_list};
use super::scalar::{decode_scalar, encode_scalar, Scalar};
use crate::complex::{Complex128, Complex64};
use crate::error::Result;
use crate::tag::Kind;
use crate::value::TypedValue;

type EncodeFn = fn(&TypedValue) -> Result<String>;
type DecodeFn = fn(&str) -> Result<TypedValue>;

/// The fixed codec pair for a built-in kind.
///
/// ```
/// use typed_json::{BuiltinCodec, Kind, TypedValue};
///
/// let codec = BuiltinCodec::for_kind(Kind::Uint8List);
/// assert_eq!(codec.encode(&TypedValue::from(vec![1u8, 2])).unwrap(), "1,2");
/// assert_eq!(codec.decode("3").unwrap(), TypedValue::from(vec![3u8]));
/// ```
#[derive(Clone, Copy)]
pub struct BuiltinCodec {
    kind: Kind,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl fmt::Debug for BuiltinCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinCodec").field("kind", &self.kind).finish()
    }
}

macro_rules! dispatch {
    ($kind:expr; $($scalar:ident, $list:ident => $ty:ty;)*) => {
        match $kind {
            $(
                Kind::$scalar => BuiltinCodec::scalar::<$ty>(),
                Kind::$list => BuiltinCodec::list::<$ty>(),
            )*
        }
    };
}

impl BuiltinCodec {
    fn scalar<T: Scalar>() -> Self {
        Self {
            kind: T::KIND,
            encode: encode_scalar::<T>,
            decode: decode_scalar::<T>,
        }
    }

    fn list<T: Scalar>() -> Self {
        Self {
            kind: T::LIST_KIND,
            encode: encode_list::<T>,
            decode: decode_list::<T>,
        }
    }

    pub fn for_kind(kind: Kind) -> Self {
        dispatch! { kind;
            Int, IntList => isize;
            Int8, Int8List => i8;
            Int16, Int16List => i16;
            Int32, Int32List => i32;
            Int64, Int64List => i64;
            Uint, UintList => usize;
            Uint8, Uint8List => u8;
            Uint16, Uint16List => u16;
            Uint32, Uint32List => u32;
            Uint64, Uint64List => u64;
            Float32, Float32List => f32;
            Float64, Float64List => f64;
            Str, StrList => String;
            Bool, BoolList => bool;
            DateTime, DateTimeList => DateTime<FixedOffset>;
            Duration, DurationList => TimeDelta;
            Complex64, Complex64List => Complex64;
            Complex128, Complex128List => Complex128;
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn encode(&self, value: &TypedValue) -> Result<String> {
        (self.encode)(value)
    }

    pub fn decode(&self, text: &str) -> Result<TypedValue> {
        (self.decode)(text)
    }
}
