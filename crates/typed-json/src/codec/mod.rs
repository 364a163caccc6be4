//! Codecs: the built-in table plus user-supplied override tables.

pub mod aggregate;
pub mod builtin;
pub mod global;
pub mod scalar;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{CodecHalf, Result, TypedJsonError};
use crate::tag::TypeTag;
use crate::value::TypedValue;

pub use builtin::BuiltinCodec;
pub use global::{clear_global_codecs, global_codecs, set_global_codecs, try_set_global_codecs};
pub use scalar::Scalar;

/// Override encoder: value to canonical string.
pub type EncodeFn = Arc<dyn Fn(&TypedValue) -> Result<String> + Send + Sync>;

/// Override decoder: canonical string to value.
pub type DecodeFn = Arc<dyn Fn(&str) -> Result<TypedValue> + Send + Sync>;

/// An encoder/decoder pair registered for one tag in a [`CodecTable`].
///
/// Both halves are optional while building, but a table holding a codec
/// with a missing half is rejected wherever the table is installed.
#[derive(Clone, Default)]
pub struct Codec {
    encode: Option<EncodeFn>,
    decode: Option<DecodeFn>,
}

impl Codec {
    /// Creates a complete codec.
    ///
    /// ```
    /// use typed_json::{Codec, TypedValue};
    ///
    /// let codec = Codec::new(
    ///     |value| Ok(value.to_string()),
    ///     |text| Ok(TypedValue::from(text)),
    /// );
    /// assert!(codec.encoder().is_some() && codec.decoder().is_some());
    /// ```
    pub fn new<E, D>(encode: E, decode: D) -> Self
    where
        E: Fn(&TypedValue) -> Result<String> + Send + Sync + 'static,
        D: Fn(&str) -> Result<TypedValue> + Send + Sync + 'static,
    {
        Self::default().with_encoder(encode).with_decoder(decode)
    }

    pub fn with_encoder<E>(mut self, encode: E) -> Self
    where
        E: Fn(&TypedValue) -> Result<String> + Send + Sync + 'static,
    {
        self.encode = Some(Arc::new(encode));
        self
    }

    pub fn with_decoder<D>(mut self, decode: D) -> Self
    where
        D: Fn(&str) -> Result<TypedValue> + Send + Sync + 'static,
    {
        self.decode = Some(Arc::new(decode));
        self
    }

    pub fn encoder(&self) -> Option<&EncodeFn> {
        self.encode.as_ref()
    }

    pub fn decoder(&self) -> Option<&DecodeFn> {
        self.decode.as_ref()
    }

    /// The first missing half, encoder before decoder.
    pub fn missing(&self) -> Option<CodecHalf> {
        if self.encode.is_none() {
            Some(CodecHalf::Encoder)
        } else if self.decode.is_none() {
            Some(CodecHalf::Decoder)
        } else {
            None
        }
    }

    pub(crate) fn encode(&self, tag: &TypeTag, value: &TypedValue) -> Result<String> {
        match &self.encode {
            Some(encode) => encode(value),
            None => Err(malformed(tag, CodecHalf::Encoder)),
        }
    }

    pub(crate) fn decode(&self, tag: &TypeTag, text: &str) -> Result<TypedValue> {
        match &self.decode {
            Some(decode) => decode(text),
            None => Err(malformed(tag, CodecHalf::Decoder)),
        }
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("encode", &self.encode.is_some())
            .field("decode", &self.decode.is_some())
            .finish()
    }
}

fn malformed(tag: &TypeTag, missing: CodecHalf) -> TypedJsonError {
    TypedJsonError::MalformedCodecTable {
        tag: tag.clone(),
        missing,
    }
}

/// Mapping from tag to override [`Codec`].
///
/// Tags may be built-in, in which case the entry shadows the built-in
/// codec, or entirely new.
///
/// ```
/// use typed_json::{Codec, CodecTable, TypeTag, TypedValue};
///
/// let table = CodecTable::new().with(
///     TypeTag::INT,
///     Codec::new(|_| Ok("42".into()), |_| Ok(TypedValue::from(42isize))),
/// );
/// assert!(table.validate().is_ok());
/// assert!(table.get("_int").is_some());
/// ```
#[derive(Clone, Default)]
pub struct CodecTable {
    codecs: BTreeMap<TypeTag, Codec>,
}

impl CodecTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `codec` for `tag`, returning the codec it replaced.
    pub fn insert(&mut self, tag: impl Into<TypeTag>, codec: Codec) -> Option<Codec> {
        self.codecs.insert(tag.into(), codec)
    }

    /// Builder form of [`CodecTable::insert`].
    pub fn with(mut self, tag: impl Into<TypeTag>, codec: Codec) -> Self {
        self.insert(tag, codec);
        self
    }

    pub fn remove(&mut self, tag: &str) -> Option<Codec> {
        self.codecs.remove(tag)
    }

    pub fn get(&self, tag: &str) -> Option<&Codec> {
        self.codecs.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.codecs.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeTag, &Codec)> {
        self.codecs.iter()
    }

    /// Checks that every entry has both halves. Entries are visited in tag
    /// order and the first incomplete one is reported.
    pub fn validate(&self) -> Result<()> {
        for (tag, codec) in &self.codecs {
            if let Some(missing) = codec.missing() {
                return Err(malformed(tag, missing));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CodecTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.codecs.iter()).finish()
    }
}

impl<T: Into<TypeTag>> FromIterator<(T, Codec)> for CodecTable {
    fn from_iter<I: IntoIterator<Item = (T, Codec)>>(iter: I) -> Self {
        let mut table = CodecTable::new();
        table.extend(iter);
        table
    }
}

impl<T: Into<TypeTag>> Extend<(T, Codec)> for CodecTable {
    fn extend<I: IntoIterator<Item = (T, Codec)>>(&mut self, iter: I) {
        for (tag, codec) in iter {
            self.insert(tag, codec);
        }
    }
}
