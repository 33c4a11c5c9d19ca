//! Bridge between Bencode value trees and `serde_json::Value`.
//!
//! Bencode's value space and JSON's overlap but do not coincide: JSON has
//! no raw bytes, Bencode has no floats, booleans, or null. The bridge is
//! therefore asymmetric by design:
//!
//! - [`to_json`] always succeeds. It is display-oriented — byte strings are
//!   decoded *lossily* under the configured encoding, so non-text bytes (a
//!   torrent's `pieces` digest, say) do not survive a JSON round trip.
//! - [`from_json`] is the open-world kind dispatch: a foreign dynamic value
//!   either maps onto one of the four Bencode kinds or the call fails
//!   immediately with [`BencodeError::UnsupportedKind`] naming the offender.
//!   Nothing is coerced, rounded, or dropped.

use crate::error::{BencodeError, Result};
use crate::value::Value;
use encoding_rs::Encoding;
use std::collections::BTreeMap;

/// Renders a Bencode value as JSON for human-readable output.
///
/// Integers become numbers; byte strings become strings under `charset`
/// with undecodable sequences replaced; lists become arrays; dictionaries
/// become objects keyed by the decoded key text, in ascending key order.
pub fn to_json(value: &Value, charset: &'static Encoding) -> serde_json::Value {
    match value {
        Value::Integer(n) => serde_json::Value::Number((*n).into()),
        Value::Bytes(bytes) => {
            let (text, _) = charset.decode_without_bom_handling(bytes);
            serde_json::Value::String(text.into_owned())
        }
        Value::List(items) => {
            serde_json::Value::Array(items.iter().map(|item| to_json(item, charset)).collect())
        }
        Value::Dict(entries) => {
            let mut object = serde_json::Map::new();
            for (key, value) in entries {
                let (key, _) = charset.decode_without_bom_handling(key);
                object.insert(key.into_owned(), to_json(value, charset));
            }
            serde_json::Value::Object(object)
        }
    }
}

/// Converts a JSON value into a Bencode value tree.
///
/// Whole numbers representable as `i64` become integers; strings are
/// encoded to bytes under `charset`; arrays and objects recurse. Every
/// other kind — `null`, booleans, floats, and integers beyond the `i64`
/// range — fails with [`BencodeError::UnsupportedKind`].
///
/// # Example
///
/// ```
/// use bencode_core::{encode, from_json};
///
/// let json = serde_json::json!({"spam": ["a", "b"], "count": 3});
/// let value = from_json(&json, encoding_rs::UTF_8).unwrap();
/// assert_eq!(encode(&value).unwrap(), b"d5:counti3e4:spaml1:a1:bee");
/// ```
pub fn from_json(json: &serde_json::Value, charset: &'static Encoding) -> Result<Value> {
    match json {
        serde_json::Value::Null => Err(BencodeError::UnsupportedKind("null")),
        serde_json::Value::Bool(_) => Err(BencodeError::UnsupportedKind("a boolean")),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(n) => Ok(Value::Integer(n)),
            None if n.is_u64() => Err(BencodeError::UnsupportedKind(
                "an integer beyond the 64-bit signed range",
            )),
            None => Err(BencodeError::UnsupportedKind("a non-integer number")),
        },
        serde_json::Value::String(text) => Ok(Value::from_text(text, charset)),
        serde_json::Value::Array(items) => {
            let items = items
                .iter()
                .map(|item| from_json(item, charset))
                .collect::<Result<Vec<Value>>>()?;
            Ok(Value::List(items))
        }
        serde_json::Value::Object(object) => {
            let mut entries = BTreeMap::new();
            for (key, value) in object {
                let (key, _, _) = charset.encode(key);
                entries.insert(key.into_owned(), from_json(value, charset)?);
            }
            Ok(Value::Dict(entries))
        }
    }
}
