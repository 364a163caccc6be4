//! List codecs: elements in their scalar grammar, joined with commas.
//!
//! A `Nil` list encodes to the empty string and the empty string decodes to
//! an empty list, so an absent list comes back empty rather than absent.

use crate::codec::scalar::Scalar;
use crate::error::{Result, TypedJsonError};
use crate::value::TypedValue;

const SEPARATOR: char = ',';

/// Encodes a list of `T`, or `Nil`, as comma-joined element text.
pub(crate) fn encode_list<T: Scalar>(value: &TypedValue) -> Result<String> {
    if value.is_nil() {
        return Ok(String::new());
    }
    let items = T::list_ref(value).ok_or_else(|| TypedJsonError::mismatch(T::LIST_KIND, value))?;

    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        if !item.is_representable() {
            return Err(TypedJsonError::out_of_range(
                T::LIST_KIND.tag(),
                T::KIND,
                item.format(),
            ));
        }
        if index > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(&item.format_element());
    }
    Ok(out)
}

/// Decodes comma-joined element text into a list of `T`.
///
/// The first element that fails to parse aborts the whole decode.
pub(crate) fn decode_list<T: Scalar>(text: &str) -> Result<TypedValue> {
    if text.is_empty() {
        return Ok(T::into_list(Vec::new()));
    }
    let items = text
        .split(SEPARATOR)
        .map(T::parse_element)
        .collect::<Result<Vec<T>>>()?;
    Ok(T::into_list(items))
}
