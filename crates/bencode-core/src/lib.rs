//! # bencode-core
//!
//! Streaming decoder and canonical encoder for **Bencode**, the
//! length-prefixed, self-delimiting serialization format used by BitTorrent
//! metadata files. Four value kinds — integers, byte strings, lists, and
//! dictionaries — travel as a byte stream with no external schema.
//!
//! The encoder output is canonical: one byte-level spelling per logical
//! value (integers without zero padding, dictionary entries in ascending
//! byte-lexicographic key order), so `encode(decode(encode(v)))` is
//! byte-identical to `encode(v)` and encoded output can be hashed or
//! compared directly.
//!
//! ## Quick start
//!
//! ```rust
//! use bencode_core::{decode, encode, Value};
//!
//! // Wire bytes → value tree
//! let value = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
//! assert_eq!(value.get("cow").and_then(Value::as_bytes), Some(&b"moo"[..]));
//!
//! // Value tree → canonical bytes (byte-identical round trip)
//! assert_eq!(encode(&value).unwrap(), b"d3:cow3:moo4:spam4:eggse");
//! ```
//!
//! Streaming over readers and writers, with chained top-level values:
//!
//! ```rust
//! use bencode_core::{Decoder, Encoder};
//!
//! let mut decoder = Decoder::new(encoding_rs::UTF_8, &b"i47e4:spam"[..]);
//! assert_eq!(decoder.read_integer().unwrap(), 47);
//! assert_eq!(decoder.read_bytes().unwrap(), b"spam");
//!
//! let mut out = Vec::new();
//! let mut encoder = Encoder::new(encoding_rs::UTF_8, &mut out);
//! encoder.write_integer(47).unwrap();
//! encoder.write_text("spam").unwrap();
//! assert_eq!(out, b"i47e4:spam");
//! ```
//!
//! Decoder and encoder are independent one-directional transforms sharing
//! only the [`Value`] vocabulary. Both are synchronous and blocking; an
//! instance drives one traversal at a time (enforced by `&mut self`), and
//! concurrent use calls for per-use instantiation or external
//! synchronization.
//!
//! ## Modules
//!
//! - [`decoder`] — byte stream → [`Value`] tree (one-token-lookahead state
//!   machine)
//! - [`encoder`] — [`Value`] tree → canonical bytes
//! - [`value`] — the four-kind value model
//! - [`json`] — conversion to/from `serde_json::Value` for display and
//!   foreign input
//! - [`error`] — failure taxonomy for both directions

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod json;
pub mod value;

pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use error::{BencodeError, Result};
pub use json::{from_json, to_json};
pub use value::Value;
