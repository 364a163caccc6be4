//! Error type for envelope encoding and decoding.

use std::fmt;

use thiserror::Error;

use crate::tag::{Kind, TypeTag};
use crate::value::TypedValue;

/// Shorthand for results produced by this crate.
pub type Result<T, E = TypedJsonError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum TypedJsonError {
    /// The value handed to an encoder is not of the tag's type.
    #[error("failed to cast '{value}' to {expected}")]
    TypeMismatch {
        tag: TypeTag,
        expected: Kind,
        value: String,
    },
    /// The value has the tag's type but its canonical text cannot carry it
    /// exactly.
    #[error("failed to represent '{value}' as {expected}")]
    OutOfRange {
        tag: TypeTag,
        expected: Kind,
        value: String,
    },
    /// The text does not follow the canonical grammar of `expected`.
    #[error("failed to convert '{text}' to {expected}")]
    Parse {
        tag: TypeTag,
        expected: Kind,
        text: String,
    },
    /// A string-list element is not base64 of UTF-8 text.
    #[error("string '{text}' is not an expected base64")]
    InvalidBase64 { tag: TypeTag, text: String },
    /// No codec tier knows the tag.
    #[error("unknown type '{tag}' to {direction}")]
    UnknownType { tag: TypeTag, direction: Direction },
    /// An override table entry lacks its encoder or decoder.
    #[error("key {tag} has a nil {missing}")]
    MalformedCodecTable { tag: TypeTag, missing: CodecHalf },
    /// Raised by an override codec; the message is passed through unchanged.
    #[error("{0}")]
    Custom(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Which way a value was travelling when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encode => f.write_str("encode"),
            Direction::Decode => f.write_str("decode"),
        }
    }
}

/// One side of a codec pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecHalf {
    Encoder,
    Decoder,
}

impl fmt::Display for CodecHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecHalf::Encoder => f.write_str("encoder"),
            CodecHalf::Decoder => f.write_str("decoder"),
        }
    }
}

impl TypedJsonError {
    /// Builds a [`TypedJsonError::Custom`] error, for use inside override codecs.
    ///
    /// ```
    /// use typed_json::TypedJsonError;
    ///
    /// let err = TypedJsonError::custom("error encoding");
    /// assert_eq!(err.to_string(), "error encoding");
    /// ```
    pub fn custom(message: impl fmt::Display) -> Self {
        TypedJsonError::Custom(message.to_string())
    }

    pub(crate) fn mismatch(expected: Kind, value: &TypedValue) -> Self {
        TypedJsonError::TypeMismatch {
            tag: expected.tag(),
            expected,
            value: value.to_string(),
        }
    }

    pub(crate) fn out_of_range(tag: TypeTag, expected: Kind, value: impl fmt::Display) -> Self {
        TypedJsonError::OutOfRange {
            tag,
            expected,
            value: value.to_string(),
        }
    }

    pub(crate) fn parse(tag: TypeTag, expected: Kind, text: &str) -> Self {
        TypedJsonError::Parse {
            tag,
            expected,
            text: text.to_string(),
        }
    }

    /// The tag the failing operation was dispatched on, when known.
    pub fn tag(&self) -> Option<&TypeTag> {
        match self {
            TypedJsonError::TypeMismatch { tag, .. }
            | TypedJsonError::OutOfRange { tag, .. }
            | TypedJsonError::Parse { tag, .. }
            | TypedJsonError::InvalidBase64 { tag, .. }
            | TypedJsonError::UnknownType { tag, .. }
            | TypedJsonError::MalformedCodecTable { tag, .. } => Some(tag),
            TypedJsonError::Custom(_) | TypedJsonError::Json(_) => None,
        }
    }
}
