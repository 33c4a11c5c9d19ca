//! Error types for Bencode decoding and encoding operations.

use thiserror::Error;

/// Errors that can occur while decoding or encoding Bencode data.
///
/// Every violated grammar or structural rule surfaces as a terminal failure
/// for the call that observed it: a failed decode yields no partial value
/// tree, and a failed encode leaves the sink mid-value. Callers that need
/// resilience must catch at the top-level call boundary and discard the
/// in-flight value.
#[derive(Error, Debug)]
pub enum BencodeError {
    /// The underlying byte source or sink failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A value started with the wrong marker byte for the expected kind.
    #[error("expected marker '{expected}', found '{found}'")]
    UnexpectedMarker { expected: char, found: char },

    /// The input ended in the middle of a token or structure.
    #[error("end of stream reached prematurely")]
    UnexpectedEnd,

    /// An integer or length field held a digit run that does not parse
    /// (empty, non-numeric, or out of range for the target type).
    #[error("invalid digits in number: {0:?}")]
    InvalidNumber(String),

    /// An integer was written with leading zeros (`i09e`). The format
    /// admits exactly one encoding per integer value.
    #[error("zero-padded integer: {0:?}")]
    ZeroPaddedInteger(String),

    /// The integer token was exactly `-0`, which no integer value encodes to.
    #[error("negative zero is not a valid integer")]
    NegativeZeroInteger,

    /// A byte string declared more bytes than the input still held.
    #[error("byte string declared {declared} bytes but only {available} were available")]
    TruncatedBytes { declared: usize, available: usize },

    /// [`decode`](crate::decode) consumed a full value with input left over.
    #[error("{0} trailing bytes after the decoded value")]
    TrailingBytes(usize),

    /// A foreign value of a kind Bencode cannot represent was handed to the
    /// encoder side (e.g. a float or boolean through the JSON bridge).
    #[error("cannot encode {0} as bencode")]
    UnsupportedKind(&'static str),
}

/// Convenience alias used throughout bencode-core.
pub type Result<T> = std::result::Result<T, BencodeError>;
