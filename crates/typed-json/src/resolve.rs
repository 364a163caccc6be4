//! Codec resolution: instance table, then shared table, then built-in.

use tracing::trace;

use crate::codec::{BuiltinCodec, Codec, CodecTable};
use crate::error::{Direction, Result, TypedJsonError};
use crate::tag::TypeTag;
use crate::value::TypedValue;

/// The tier that served a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The envelope's own override table.
    Instance,
    /// The process-wide table, or a table passed in its place.
    Global,
    BuiltIn,
}

enum Selected<'a> {
    Override(&'a Codec),
    BuiltIn(BuiltinCodec),
}

/// Picks the codec for a tag. The first tier that knows the tag wins; tiers
/// are never merged.
///
/// ```
/// use typed_json::{Resolver, Tier, TypeTag, TypedValue};
///
/// let resolver = Resolver::new(None, None);
/// assert_eq!(resolver.tier(&TypeTag::INT8), Some(Tier::BuiltIn));
/// assert_eq!(resolver.encode(&TypeTag::INT8, &TypedValue::from(-3i8)).unwrap(), "-3");
/// assert!(resolver.decode(&TypeTag::new("money"), "1").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'a> {
    instance: Option<&'a CodecTable>,
    shared: Option<&'a CodecTable>,
}

impl<'a> Resolver<'a> {
    pub fn new(instance: Option<&'a CodecTable>, shared: Option<&'a CodecTable>) -> Self {
        Self { instance, shared }
    }

    /// Which tier would serve `tag`, or `None` if no tier knows it.
    pub fn tier(&self, tag: &TypeTag) -> Option<Tier> {
        self.select(tag).map(|(tier, _)| tier)
    }

    pub fn encode(&self, tag: &TypeTag, value: &TypedValue) -> Result<String> {
        match self.select(tag) {
            Some((tier, selected)) => {
                trace!(%tag, ?tier, "encoding");
                match selected {
                    Selected::Override(codec) => codec.encode(tag, value),
                    Selected::BuiltIn(codec) => codec.encode(value),
                }
            }
            None => Err(unknown(tag, Direction::Encode)),
        }
    }

    pub fn decode(&self, tag: &TypeTag, text: &str) -> Result<TypedValue> {
        match self.select(tag) {
            Some((tier, selected)) => {
                trace!(%tag, ?tier, "decoding");
                match selected {
                    Selected::Override(codec) => codec.decode(tag, text),
                    Selected::BuiltIn(codec) => codec.decode(text),
                }
            }
            None => Err(unknown(tag, Direction::Decode)),
        }
    }

    fn select(&self, tag: &TypeTag) -> Option<(Tier, Selected<'a>)> {
        if let Some(codec) = self.instance.and_then(|table| table.get(tag.as_str())) {
            return Some((Tier::Instance, Selected::Override(codec)));
        }
        if let Some(codec) = self.shared.and_then(|table| table.get(tag.as_str())) {
            return Some((Tier::Global, Selected::Override(codec)));
        }
        let kind = tag.kind()?;
        Some((Tier::BuiltIn, Selected::BuiltIn(BuiltinCodec::for_kind(kind))))
    }
}

fn unknown(tag: &TypeTag, direction: Direction) -> TypedJsonError {
    TypedJsonError::UnknownType {
        tag: tag.clone(),
        direction,
    }
}
