//! Typed-value envelopes for JSON.
//!
//! An [`Envelope`] pairs a value with a [`TypeTag`] and travels as a
//! two-field object whose `Value` is always a string:
//!
//! ```text
//! {"Type": "_int8", "Value": "-3"}
//! {"Type": "_duration_array", "Value": "4ms,1h2m3.5s"}
//! ```
//!
//! The tag keeps type information that plain JSON would lose (an `i8` stays
//! an `i8`, a duration stays a duration). Built-in codecs cover integers of
//! every width, floats, strings, bools, datetimes, durations, complex numbers
//! and lists of each. Override [`CodecTable`]s can replace any built-in codec
//! or add new tags, either per envelope or process-wide.
//!
//! # Example
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use typed_json::{Envelope, TypeTag, TypedValue};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Reading {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     level: Option<Envelope>,
//!     samples: Envelope,
//! }
//!
//! let reading = Reading {
//!     level: None,
//!     samples: Envelope::new(TypeTag::UINT16_LIST, vec![3u16, 500], None),
//! };
//! let json = serde_json::to_string(&reading).unwrap();
//! assert_eq!(json, r#"{"samples":{"Type":"_uint16_array","Value":"3,500"}}"#);
//!
//! let back: Reading = serde_json::from_str(&json).unwrap();
//! assert!(back.level.is_none());
//! assert_eq!(back.samples.value, TypedValue::from(vec![3u16, 500]));
//! ```

pub mod codec;
pub mod complex;
pub mod envelope;
pub mod error;
pub mod grammar;
pub mod resolve;
pub mod tag;
pub mod value;

pub use codec::{
    clear_global_codecs, global_codecs, set_global_codecs, try_set_global_codecs, BuiltinCodec,
    Codec, CodecTable, DecodeFn, EncodeFn, Scalar,
};
pub use complex::{Complex, Complex128, Complex64};
pub use envelope::{CanonicalPair, Envelope};
pub use error::{CodecHalf, Direction, Result, TypedJsonError};
pub use resolve::{Resolver, Tier};
pub use tag::{Kind, TypeTag};
pub use value::TypedValue;
