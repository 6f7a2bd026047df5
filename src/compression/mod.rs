//! The compression module manages both directions of the HEF codec.
//!
//! Encoding happens in the following steps:
//! - Frequency count: how often each symbol occurs in the input.
//! - Code tree: merge the two lightest nodes until one root is left.
//! - Code table: walk the tree to find the code of every symbol.
//! - Data: concatenate the code of every input symbol.
//! - Serialise: write the table arrays and the data bits into the container.
//!
//! The container (HEF, Huffman Encoded File) holds:
//!
//! ```text
//! [alphabet size: num]
//! [alphabet: one symbol per entry, little endian]
//! [lengths: one byte per symbol, the bit length of its code]
//! [codes: concatenated, padded to a byte, no length header]
//! [data whole bytes: num]
//! [data remainder bits: one byte, 0-7]
//! [data bits, padded to a byte]
//! ```
//!
//! where `num` is a tag byte (0-3) followed by the value in 1, 2, 4 or 8 little endian bytes,
//! always the smallest width that holds it.
//!
//! Decoding follows the inverse of the encoding process.
//! - Deserialise: read the table arrays and the data bits, checking every read against the end
//!   of the blob.
//! - Code table: cut the concatenated codes by their lengths.
//! - Code tree: insert the path of every code.
//! - Decode: walk the tree bit by bit, emitting a symbol at each leaf.
//!

pub mod decode;
pub mod encode;
pub mod varint;
