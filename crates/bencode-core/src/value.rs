//! The Bencode value tree.
//!
//! A decoded document is a tree of [`Value`]s: integers, byte strings,
//! lists, and dictionaries. Byte strings are raw bytes — Bencode has no
//! notion of character data on the wire, and dictionary keys in particular
//! are frequently non-text (hash digests, packed binary blobs). Text is a
//! *view* over a byte string under a configured [`Encoding`], produced on
//! demand by [`Value::to_text`] and never stored separately.
//!
//! Dictionaries are kept in a [`BTreeMap`] with raw-byte keys, so the
//! encoded form of a dictionary is a pure function of its contents: two
//! dictionaries built in different insertion orders hold — and serialize to —
//! exactly the same thing.

use encoding_rs::Encoding;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single Bencode value: one of the four kinds the format can express.
///
/// Trees are built bottom-up by the decoder or constructed directly before
/// encoding; nested containers own their children exclusively. The format
/// cannot express cycles or sharing.
///
/// # Example
///
/// ```
/// use bencode_core::Value;
///
/// let value = Value::from(vec![Value::from(47), Value::from("spam")]);
/// assert!(value.as_list().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer.
    Integer(i64),
    /// Raw byte string; not required to be valid text in any encoding.
    Bytes(Vec<u8>),
    /// Ordered sequence of values. Order is significant and preserved.
    List(Vec<Value>),
    /// Mapping from raw-byte keys to values. Iteration order is ascending
    /// byte-lexicographic by construction, matching the canonical wire order.
    Dict(BTreeMap<Vec<u8>, Value>),
}

impl Value {
    /// Builds a byte-string value from text under the given encoding.
    ///
    /// Characters the encoding cannot represent are replaced, mirroring how
    /// the text convenience entry points behave elsewhere in this crate.
    pub fn from_text(text: &str, charset: &'static Encoding) -> Value {
        let (bytes, _, _) = charset.encode(text);
        Value::Bytes(bytes.into_owned())
    }

    /// Returns the integer payload, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw bytes, if this is a byte string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the underlying map, if this is a dictionary.
    pub fn as_dict(&self) -> Option<&BTreeMap<Vec<u8>, Value>> {
        match self {
            Value::Dict(entries) => Some(entries),
            _ => None,
        }
    }

    /// Looks up a dictionary entry by key. Returns `None` if this value is
    /// not a dictionary or the key is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use bencode_core::decode;
    ///
    /// let value = decode(b"d3:cow3:mooe").unwrap();
    /// assert_eq!(value.get("cow").and_then(|v| v.as_bytes()), Some(&b"moo"[..]));
    /// ```
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        match self {
            Value::Dict(entries) => entries.get(key.as_ref()),
            _ => None,
        }
    }

    /// Decodes this byte string as text under the given encoding.
    ///
    /// A pure function of (bytes, encoding): undecodable sequences become
    /// replacement characters rather than failing, the same behavior as
    /// [`Decoder::read_text`](crate::Decoder::read_text). Returns `None`
    /// for non-byte-string values.
    pub fn to_text(&self, charset: &'static Encoding) -> Option<Cow<'_, str>> {
        match self {
            Value::Bytes(bytes) => {
                let (text, _) = charset.decode_without_bom_handling(bytes);
                Some(text)
            }
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Value {
        Value::Integer(n)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Value {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Value {
        Value::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(bytes: &[u8; N]) -> Value {
        Value::Bytes(bytes.to_vec())
    }
}

/// Stores the string's UTF-8 bytes. Use [`Value::from_text`] for other
/// encodings.
impl From<&str> for Value {
    fn from(text: &str) -> Value {
        Value::Bytes(text.as_bytes().to_vec())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Value {
        Value::Bytes(text.into_bytes())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}

impl From<BTreeMap<Vec<u8>, Value>> for Value {
    fn from(entries: BTreeMap<Vec<u8>, Value>) -> Value {
        Value::Dict(entries)
    }
}
