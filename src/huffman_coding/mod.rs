//! The huffman module builds the prefix free codes for the HEF codec and decodes data bits back
//! into symbols.
//!
//! A code tree is built once per encode, from the symbol frequencies of the input, or once per
//! decode, from the code table stored in the container. Leaves hold symbols and the path from the
//! root to a leaf (left = 0, right = 1) is that symbol's code.
//!
//! The tree is built with a min-heap keyed on (frequency, insertion order). Leaves go in by
//! ascending symbol value, so the same input always produces the same codes on every platform.
//!
//! - symbol: the Symbol trait for alphabet elements.
//! - huffman: the code tree, its construction and the decoder.
//! - code_table: the symbol to code map and its container arrays.
//!

pub mod code_table;
pub mod huffman;
pub mod symbol;
