//! The bitstream module forms the bit level storage and I/O subsystem for the HEF codec.
//!
//! - bitseq: BitSequence, a packed growable sequence of bits over 64 bit blocks. Codes, the
//!   concatenated alphabet codes and the encoded data are all held in BitSequences.
//! - bytereader: a bounds checked cursor over a HEF blob. Reading past the end is an error.
//! - bytewriter: packs bytes and bit sequences into the output blob.
//!
//! This I/O subsystem is designed to efficiently interface with the other modules of the codec. It
//! is not intended for more general use.
//!
pub mod bitseq;
pub mod bytereader;
pub mod bytewriter;
