//! Huffman coding with a self describing binary container (HEF).
//!
//! Builds a prefix free code for the symbols of an input sequence, encodes the sequence with it
//! and writes both the code table and the encoded bits into a compact container that decodes
//! losslessly.
//!
//! Basic usage:
//!
//! ```
//! let blob = hefzip::encode("aaaabbc".as_bytes())?;
//! let data: Vec<u8> = hefzip::decode_to_vec(&blob)?;
//! assert_eq!(data, b"aaaabbc");
//! assert_eq!(hefzip::inspect::<u8>(&blob)?.alphabet_size, 3);
//! # Ok::<(), hefzip::HefError>(())
//! ```
//!
//! Any `Symbol` can be encoded: the integer types and `char`. Each call owns all of its state,
//! so independent calls can run on different threads.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use bitstream::bitseq::BitSequence;
pub use compression::decode::{decode, decode_to_vec, inspect, HefHeader};
pub use compression::encode::encode;
pub use error::{HefError, Result};
pub use huffman_coding::code_table::CodeTable;
pub use huffman_coding::huffman::CodeTree;
pub use huffman_coding::symbol::Symbol;
