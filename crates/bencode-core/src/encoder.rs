//! Canonical Bencode encoder.
//!
//! [`Encoder`] writes values straight to any [`Write`] sink. The output is
//! *canonical*: every logical value has exactly one byte-level spelling, so
//! consumers may hash or compare encoded output directly. Concretely:
//!
//! - integers carry no leading zeros, no `+`, and no `-0`;
//! - dictionary entries are written in ascending byte-lexicographic key
//!   order, sorted **inside** [`write_dict`](Encoder::write_dict) — never
//!   assumed of the caller's container;
//! - byte strings are written verbatim, text is converted to bytes under
//!   the configured encoding before its length is taken.
//!
//! Encoding a well-typed [`Value`] cannot fail except through the sink;
//! sink errors propagate and leave the sink mid-value, non-reusable for
//! that logical value.

use crate::error::Result;
use crate::value::Value;
use encoding_rs::Encoding;
use std::io::Write;

/// Encode a value tree into a fresh byte buffer.
///
/// # Example
///
/// ```
/// use bencode_core::{encode, Value};
///
/// let bytes = encode(&Value::from(-47)).unwrap();
/// assert_eq!(bytes, b"i-47e");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    Encoder::new(encoding_rs::UTF_8, &mut out).write_value(value)?;
    Ok(out)
}

/// Streaming Bencode encoder over a byte sink.
///
/// The encoder keeps no state between calls except the sink itself, so a
/// sequence of top-level `write_*` calls against one encoder produces a
/// stream of adjacent values — a supported way to build output without an
/// enclosing container. The configured [`Encoding`] is consumed only by
/// [`write_text`](Encoder::write_text).
pub struct Encoder<W> {
    charset: &'static Encoding,
    writer: W,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder writing to `writer`, encoding text through
    /// `charset`.
    pub fn new(charset: &'static Encoding, writer: W) -> Encoder<W> {
        Encoder { charset, writer }
    }

    /// Writes an integer as `i<decimal>e`.
    ///
    /// The decimal is the value's canonical form: `-` only for strictly
    /// negative values, no leading zeros, exactly `0` for zero.
    pub fn write_integer(&mut self, value: i64) -> Result<()> {
        write!(self.writer, "i{value}e")?;
        Ok(())
    }

    /// Writes text as a byte string under the configured encoding.
    ///
    /// The length prefix counts *encoded bytes*, not characters; a
    /// multi-byte encoding may yield more bytes than visible characters.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        let (bytes, _, _) = self.charset.encode(text);
        self.write_bytes(&bytes)
    }

    /// Writes raw bytes as `<length>:<bytes>`, verbatim, with no
    /// re-encoding.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        write!(self.writer, "{}:", bytes.len())?;
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Writes a list as `l<values>e`, each element dispatched by kind, in
    /// the order given.
    pub fn write_list(&mut self, items: &[Value]) -> Result<()> {
        self.writer.write_all(b"l")?;
        for item in items {
            self.write_value(item)?;
        }
        self.writer.write_all(b"e")?;
        Ok(())
    }

    /// Writes a dictionary as `d<key value pairs>e` in ascending
    /// byte-lexicographic key order.
    ///
    /// Entries are collected and sorted here, unconditionally — the caller
    /// may pass any map or pair iterator in any order and the wire order
    /// comes out the same.
    ///
    /// # Example
    ///
    /// ```
    /// use bencode_core::{Encoder, Value};
    ///
    /// let mut out = Vec::new();
    /// let mut encoder = Encoder::new(encoding_rs::UTF_8, &mut out);
    /// let pairs = [(b"end", Value::from(47)), (b"and", Value::from(42))];
    /// encoder.write_dict(pairs.iter().map(|(k, v)| (k, v))).unwrap();
    /// assert_eq!(out, b"d3:andi42e3:endi47ee");
    /// ```
    pub fn write_dict<'a, K, I>(&mut self, entries: I) -> Result<()>
    where
        K: AsRef<[u8]>,
        I: IntoIterator<Item = (K, &'a Value)>,
    {
        let mut entries: Vec<(K, &Value)> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

        self.writer.write_all(b"d")?;
        for (key, value) in entries {
            self.write_bytes(key.as_ref())?;
            self.write_value(value)?;
        }
        self.writer.write_all(b"e")?;
        Ok(())
    }

    /// Writes any value, dispatching on its kind.
    ///
    /// The four kinds are closed by the format, so this is a plain
    /// exhaustive match — the entry point for encoding heterogeneous
    /// top-level values or children of containers.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Integer(n) => self.write_integer(*n),
            Value::Bytes(bytes) => self.write_bytes(bytes),
            Value::List(items) => self.write_list(items),
            Value::Dict(entries) => self.write_dict(entries),
        }
    }
}
