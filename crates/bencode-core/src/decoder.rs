//! Streaming Bencode decoder.
//!
//! [`Decoder`] wraps any [`Read`] source and decodes one value per call,
//! building the [`Value`] tree bottom-up. It recognizes the four wire kinds:
//!
//! - `i<decimal>e` — integer
//! - `<length>:<bytes>` — byte string (no marker; a value starting with a
//!   digit is a byte string)
//! - `l<values>e` — list
//! - `d<key value pairs>e` — dictionary
//!
//! # Key design decisions
//!
//! - **One-byte lookahead slot**: the grammar needs exactly one byte of
//!   lookahead (to spot the `e` terminator and to dispatch on a value's
//!   first byte without consuming it). Rather than requiring pushback
//!   support from the stream, the decoder owns an explicit `Option<u8>`
//!   slot that every read path drains first.
//! - **Eager rejection**: each rule is checked at the byte where it is
//!   violated. There is no repair, no skipping, and no partial result — a
//!   failed call yields only its error.
//! - **Untrusted lengths**: a byte string's declared length caps a bounded
//!   reader ([`Read::take`]); a hostile header cannot force a large
//!   allocation before the bytes actually arrive.
//! - **Asymmetric zero rules**: integer digit runs reject zero padding and
//!   `-0` (the format admits exactly one spelling per integer), but byte
//!   string *length* fields accept leading zeros. The asymmetry is part of
//!   the format as deployed and is preserved here rather than unified.

use crate::error::{BencodeError, Result};
use crate::value::Value;
use encoding_rs::Encoding;
use std::collections::BTreeMap;
use std::io::{ErrorKind, Read};

const INTEGER_MARK: u8 = b'i';
const LIST_MARK: u8 = b'l';
const DICTIONARY_MARK: u8 = b'd';
const STRING_SPLIT: u8 = b':';
const END_MARK: u8 = b'e';

/// Decode a single Bencode value from a byte slice.
///
/// The whole slice must be consumed; leftover bytes fail with
/// [`BencodeError::TrailingBytes`]. To read several top-level values from
/// one stream, use [`Decoder`] directly and issue one `read_*` call per
/// value.
///
/// # Example
///
/// ```
/// use bencode_core::{decode, Value};
///
/// let value = decode(b"l2:coi47ee").unwrap();
/// assert_eq!(
///     value,
///     Value::List(vec![Value::from("co"), Value::from(47)]),
/// );
/// ```
pub fn decode(input: &[u8]) -> Result<Value> {
    let mut decoder = Decoder::new(encoding_rs::UTF_8, input);
    let value = decoder.read_value()?;
    let rest = decoder.peeked.is_some() as usize + decoder.reader.len();
    if rest > 0 {
        return Err(BencodeError::TrailingBytes(rest));
    }
    Ok(value)
}

/// Streaming Bencode decoder over a byte source.
///
/// Each `read_*` operation assumes the cursor sits exactly at the start of a
/// value of that kind and consumes the value in full, so calls can be chained
/// to pull a sequence of top-level values from one stream. The decoder is
/// synchronous and blocks on the underlying reader; one decoder drives one
/// traversal at a time (`&mut self` on every operation).
///
/// The configured [`Encoding`] is consumed only by [`read_text`]; the raw
/// byte paths never touch it. Reads go through the source a byte at a time
/// outside of string bodies — hand the decoder a buffered reader when
/// decoding from a file or socket.
///
/// [`read_text`]: Decoder::read_text
pub struct Decoder<R> {
    charset: &'static Encoding,
    reader: R,
    peeked: Option<u8>,
}

impl<R: Read> Decoder<R> {
    /// Creates a decoder reading from `reader`, decoding text through
    /// `charset` when asked for a string view.
    pub fn new(charset: &'static Encoding, reader: R) -> Decoder<R> {
        Decoder {
            charset,
            reader,
            peeked: None,
        }
    }

    /// Decodes an integer: marker `i`, optionally signed decimal digits,
    /// terminator `e`.
    ///
    /// Rejects empty digit runs, non-digit bytes, zero padding in the run
    /// after the sign (`i09e` and `i-07e` both fail), the exact token `-0`,
    /// and magnitudes that overflow `i64`.
    pub fn read_integer(&mut self) -> Result<i64> {
        self.expect_marker(INTEGER_MARK)?;
        let mut digits = Vec::new();
        loop {
            match self.next_byte()? {
                None => return Err(BencodeError::UnexpectedEnd),
                Some(END_MARK) => break,
                Some(byte) => digits.push(byte),
            }
        }

        let run = digits.strip_prefix(b"-").unwrap_or(&digits[..]);
        if run.is_empty() || !run.iter().all(u8::is_ascii_digit) {
            return Err(BencodeError::InvalidNumber(lossy(&digits)));
        }
        if run.len() > 1 && run[0] == b'0' {
            return Err(BencodeError::ZeroPaddedInteger(lossy(&digits)));
        }
        if digits == b"-0" {
            return Err(BencodeError::NegativeZeroInteger);
        }

        // All-ASCII by the checks above.
        let text = String::from_utf8_lossy(&digits);
        text.parse::<i64>()
            .map_err(|_| BencodeError::InvalidNumber(text.into_owned()))
    }

    /// Decodes a byte string: decimal length, `:`, then exactly that many
    /// raw bytes.
    ///
    /// Length fields accept leading zeros (`03:abc` is valid); declaring
    /// more bytes than the input holds fails with
    /// [`BencodeError::TruncatedBytes`].
    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let mut digits = Vec::new();
        loop {
            match self.next_byte()? {
                None => return Err(BencodeError::UnexpectedEnd),
                Some(STRING_SPLIT) => break,
                Some(byte) if byte.is_ascii_digit() => digits.push(byte),
                Some(byte) => {
                    digits.push(byte);
                    return Err(BencodeError::InvalidNumber(lossy(&digits)));
                }
            }
        }
        if digits.is_empty() {
            return Err(BencodeError::InvalidNumber(String::new()));
        }
        let length: usize = String::from_utf8_lossy(&digits)
            .parse()
            .map_err(|_| BencodeError::InvalidNumber(lossy(&digits)))?;
        self.read_body(length)
    }

    /// Decodes a byte string and views it as text under the configured
    /// encoding.
    ///
    /// Undecodable byte sequences become replacement characters; the
    /// structural rules are exactly those of [`read_bytes`](Decoder::read_bytes).
    pub fn read_text(&mut self) -> Result<String> {
        let bytes = self.read_bytes()?;
        let (text, _) = self.charset.decode_without_bom_handling(&bytes);
        Ok(text.into_owned())
    }

    /// Decodes a list: marker `l`, any number of values, terminator `e`.
    pub fn read_list(&mut self) -> Result<Vec<Value>> {
        self.expect_marker(LIST_MARK)?;
        let mut items = Vec::new();
        loop {
            match self.peek()? {
                None => return Err(BencodeError::UnexpectedEnd),
                Some(END_MARK) => {
                    self.next_byte()?;
                    return Ok(items);
                }
                Some(_) => items.push(self.read_value()?),
            }
        }
    }

    /// Decodes a dictionary: marker `d`, any number of byte-string keys each
    /// followed by a value, terminator `e`.
    ///
    /// Input entries may arrive in any key order; the returned map looks
    /// values up by key and iterates in ascending key order regardless of
    /// what the wire carried.
    pub fn read_dict(&mut self) -> Result<BTreeMap<Vec<u8>, Value>> {
        self.expect_marker(DICTIONARY_MARK)?;
        let mut entries = BTreeMap::new();
        loop {
            match self.peek()? {
                None => return Err(BencodeError::UnexpectedEnd),
                Some(END_MARK) => {
                    self.next_byte()?;
                    return Ok(entries);
                }
                Some(_) => {
                    let key = self.read_bytes()?;
                    let value = self.read_value()?;
                    entries.insert(key, value);
                }
            }
        }
    }

    /// Peeks one byte and routes to the reader for that kind. Anything that
    /// is not an `i`/`l`/`d` marker starts a byte string.
    fn read_value(&mut self) -> Result<Value> {
        match self.peek()? {
            None => Err(BencodeError::UnexpectedEnd),
            Some(INTEGER_MARK) => self.read_integer().map(Value::Integer),
            Some(LIST_MARK) => self.read_list().map(Value::List),
            Some(DICTIONARY_MARK) => self.read_dict().map(Value::Dict),
            Some(_) => self.read_bytes().map(Value::Bytes),
        }
    }

    /// Consumes the marker byte that opens a value of the expected kind.
    fn expect_marker(&mut self, expected: u8) -> Result<()> {
        match self.next_byte()? {
            Some(byte) if byte == expected => Ok(()),
            Some(byte) => Err(BencodeError::UnexpectedMarker {
                expected: expected as char,
                found: byte as char,
            }),
            None => Err(BencodeError::UnexpectedEnd),
        }
    }

    /// Next byte from the lookahead slot or the reader; `None` at end of
    /// stream.
    fn next_byte(&mut self) -> Result<Option<u8>> {
        if let Some(byte) = self.peeked.take() {
            return Ok(Some(byte));
        }
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Fills the lookahead slot if needed and returns its content without
    /// consuming it.
    fn peek(&mut self) -> Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.next_byte()?;
        }
        Ok(self.peeked)
    }

    /// Reads exactly `length` raw bytes for a string body, draining the
    /// lookahead slot first.
    fn read_body(&mut self, length: usize) -> Result<Vec<u8>> {
        // The declared length is untrusted until the bytes actually arrive.
        let mut body = Vec::with_capacity(length.min(1 << 16));
        if length == 0 {
            return Ok(body);
        }
        if let Some(byte) = self.peeked.take() {
            body.push(byte);
        }
        let remaining = (length - body.len()) as u64;
        self.reader
            .by_ref()
            .take(remaining)
            .read_to_end(&mut body)?;
        if body.len() < length {
            return Err(BencodeError::TruncatedBytes {
                declared: length,
                available: body.len(),
            });
        }
        Ok(body)
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
