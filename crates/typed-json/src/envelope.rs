//! The tagged envelope and its two-field wire form.

use std::sync::Arc;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{global_codecs, CodecTable};
use crate::error::Result;
use crate::resolve::Resolver;
use crate::tag::TypeTag;
use crate::value::TypedValue;

/// The wire form of an envelope: `{"Type": <tag>, "Value": <canonical string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalPair {
    #[serde(rename = "Type")]
    pub tag: TypeTag,
    #[serde(rename = "Value")]
    pub value: String,
}

impl CanonicalPair {
    pub fn new(tag: impl Into<TypeTag>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            value: value.into(),
        }
    }
}

/// A value paired with the tag that says how to encode it.
///
/// Codecs are looked up in the envelope's own table first, then in the
/// process-wide table, then in the built-in table.
///
/// # Example
///
/// ```
/// use typed_json::{Envelope, TypeTag};
///
/// let envelope = Envelope::new(TypeTag::FLOAT64, 4.0f64, None);
/// let json = envelope.to_json_string().unwrap();
/// assert_eq!(json, r#"{"Type":"_float64","Value":"4E+00"}"#);
///
/// let mut decoded = Envelope::decoder(None);
/// decoded.decode_json(&json).unwrap();
/// assert_eq!(decoded.value.as_scalar::<f64>(), Some(&4.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub tag: TypeTag,
    pub value: TypedValue,
    codecs: Option<Arc<CodecTable>>,
}

impl Envelope {
    /// Creates an envelope. The value is not checked against the tag until
    /// it is encoded.
    ///
    /// # Panics
    ///
    /// Panics if `codecs` has an entry without an encoder or decoder.
    pub fn new(
        tag: impl Into<TypeTag>,
        value: impl Into<TypedValue>,
        codecs: Option<CodecTable>,
    ) -> Self {
        match Self::try_new(tag, value, codecs) {
            Ok(envelope) => envelope,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Envelope::new`].
    pub fn try_new(
        tag: impl Into<TypeTag>,
        value: impl Into<TypedValue>,
        codecs: Option<CodecTable>,
    ) -> Result<Self> {
        let mut envelope = Self::try_decoder(codecs)?;
        envelope.tag = tag.into();
        envelope.value = value.into();
        Ok(envelope)
    }

    /// Creates an empty envelope to decode into.
    ///
    /// # Panics
    ///
    /// Panics if `codecs` has an entry without an encoder or decoder.
    pub fn decoder(codecs: Option<CodecTable>) -> Self {
        match Self::try_decoder(codecs) {
            Ok(envelope) => envelope,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible form of [`Envelope::decoder`].
    pub fn try_decoder(codecs: Option<CodecTable>) -> Result<Self> {
        if let Some(table) = &codecs {
            table.validate()?;
        }
        Ok(Self {
            tag: TypeTag::default(),
            value: TypedValue::Nil,
            codecs: codecs.map(Arc::new),
        })
    }

    /// The envelope's own override table.
    pub fn codecs(&self) -> Option<&CodecTable> {
        self.codecs.as_deref()
    }

    pub fn into_value(self) -> TypedValue {
        self.value
    }

    /// Encodes the value using the process-wide table as the shared tier.
    pub fn encode(&self) -> Result<CanonicalPair> {
        let shared = global_codecs();
        self.encode_with(shared.as_deref())
    }

    /// Encodes the value with `shared` standing in for the process-wide table.
    pub fn encode_with(&self, shared: Option<&CodecTable>) -> Result<CanonicalPair> {
        let value = self.resolver(shared).encode(&self.tag, &self.value)?;
        Ok(CanonicalPair {
            tag: self.tag.clone(),
            value,
        })
    }

    /// Decodes `pair` into this envelope, replacing its tag and value. On
    /// error the envelope is left as it was.
    pub fn decode(&mut self, pair: &CanonicalPair) -> Result<()> {
        let shared = global_codecs();
        self.decode_with(pair, shared.as_deref())
    }

    /// Decodes with `shared` standing in for the process-wide table.
    pub fn decode_with(&mut self, pair: &CanonicalPair, shared: Option<&CodecTable>) -> Result<()> {
        let value = self.resolver(shared).decode(&pair.tag, &pair.value)?;
        self.tag = pair.tag.clone();
        self.value = value;
        Ok(())
    }

    /// Serializes the encoded pair as a JSON object.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.encode()?)?)
    }

    /// Parses a JSON object into a pair and decodes it into this envelope,
    /// using the envelope's own table.
    pub fn decode_json(&mut self, text: &str) -> Result<()> {
        let pair: CanonicalPair = serde_json::from_str(text)?;
        self.decode(&pair)
    }

    fn resolver<'a>(&'a self, shared: Option<&'a CodecTable>) -> Resolver<'a> {
        Resolver::new(self.codecs.as_deref(), shared)
    }
}

/// Envelopes compare by tag and value; override tables are ignored.
impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.value == other.value
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.encode().map_err(<S::Error as ser::Error>::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let pair = CanonicalPair::deserialize(deserializer)?;
        let mut envelope = Envelope::default();
        envelope.decode(&pair).map_err(<D::Error as de::Error>::custom)?;
        Ok(envelope)
    }
}
