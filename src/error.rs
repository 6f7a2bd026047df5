//! Error types for HEF encoding and decoding.

use thiserror::Error;

/// Everything that can go wrong while building, writing or reading a HEF container.
#[derive(Debug, Error)]
pub enum HefError {
    /// A variable width number started with a tag byte other than 0-3.
    #[error("malformed header: unknown number tag {tag} at byte {offset}")]
    MalformedHeader { tag: u8, offset: usize },

    /// The container ended before a field the header promised.
    #[error("truncated input: needed {needed} bytes at byte {offset}, only {available} left")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The data remainder byte must hold 0-7.
    #[error("invalid data remainder: {0} bits")]
    InvalidRemainder(u8),

    /// A declared size does not fit this platform.
    #[error("declared size {0} is too large")]
    SizeOverflow(u64),

    /// The alphabet holds bytes that are not a valid symbol value.
    #[error("invalid symbol bytes at byte {offset}")]
    InvalidSymbol { offset: usize },

    /// The table arrays do not hold one length per symbol.
    #[error("code table lists {symbols} symbols but {lengths} lengths")]
    LengthCountMismatch { symbols: usize, lengths: usize },

    /// The concatenated codes are shorter than the lengths add up to.
    #[error("code table needs {needed} code bits, only {available} given")]
    MissingCodeBits { needed: usize, available: usize },

    /// Two table entries claim overlapping paths in the code tree.
    #[error("conflicting code for symbol {symbol}")]
    ConflictingCode { symbol: String },

    /// The data bits walk off the code tree.
    #[error("invalid code at data bit {bit_index}")]
    InvalidCode { bit_index: usize },

    /// A code does not fit in its one byte length field.
    #[error("code for symbol {symbol} is {bits} bits long, the limit is 255")]
    CodeTooLong { symbol: String, bits: usize },

    /// The input holds a symbol the code table has no code for.
    #[error("no code for symbol {symbol}")]
    MissingSymbol { symbol: String },

    /// File I/O, used by the command line tool.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HefError>;
