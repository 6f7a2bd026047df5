//! ByteReader: the input side of the HEF container.
//!
//! Reads fields from a borrowed byte slice. Every read is bounds checked and a read past the
//! end of the slice is reported as a truncation error rather than touching memory outside it.
//!

use super::bitseq::BitSequence;
use crate::error::{HefError, Result};

/// Cursor over a HEF blob.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a new ByteReader positioned at the start of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Current position in the buffer.
    pub fn loc(&self) -> usize {
        self.cursor
    }

    /// Return the next n bytes, or a truncation error if fewer are left.
    pub fn bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(HefError::Truncated {
                offset: self.cursor,
                needed: n,
                available: self.remaining(),
            });
        }
        let out = &self.buffer[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(out)
    }

    /// Return the next byte.
    pub fn byte(&mut self) -> Result<u8> {
        self.bytes(1).map(|b| b[0])
    }

    /// Return the next N bytes as an array, for fixed width numbers.
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0_u8; N];
        out.copy_from_slice(self.bytes(N)?);
        Ok(out)
    }

    /// Read `n_bits` bits packed most significant first, the last byte left justified.
    pub fn bits(&mut self, n_bits: usize) -> Result<BitSequence> {
        let whole_bytes = n_bits / 8;
        let partial_bits = n_bits % 8;
        // Check the whole span up front so we never build half a sequence
        let needed = whole_bytes + usize::from(partial_bits > 0);
        let data = self.bytes(needed)?;

        let mut seq = BitSequence::with_capacity(n_bits);
        data.iter()
            .take(whole_bytes)
            .for_each(|&byte| seq.push_byte(byte, 8));
        if partial_bits > 0 {
            seq.push_byte(data[whole_bytes], partial_bits);
        }
        Ok(seq)
    }
}

#[cfg(test)]
mod test {
    use super::ByteReader;
    use crate::error::HefError;

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = ByteReader::new(x);
        assert_eq!(br.byte().unwrap(), b'H');
        assert_eq!(br.byte().unwrap(), b'e');
        assert_eq!(br.loc(), 2);
        assert_eq!(br.remaining(), 11);
    }

    #[test]
    fn bytes_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = ByteReader::new(x);
        assert_eq!(br.bytes(5).unwrap(), b"Hello");
        assert_eq!(br.array::<2>().unwrap(), [b',', b' ']);
        assert!(br.bytes(7).is_err());
        // A failed read does not move the cursor
        assert_eq!(br.bytes(6).unwrap(), b"world!");
        assert_eq!(br.remaining(), 0);
    }

    #[test]
    fn truncated_test() {
        let x = [1_u8, 2];
        let mut br = ByteReader::new(&x);
        br.byte().unwrap();
        match br.array::<4>() {
            Err(HefError::Truncated {
                offset,
                needed,
                available,
            }) => {
                assert_eq!((offset, needed, available), (1, 4, 1));
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn bits_test() {
        let x = [0b1000_0001_u8, 0b1010_0000];
        let mut br = ByteReader::new(&x);
        let seq = br.bits(11).unwrap();
        assert_eq!(seq.to_string(), "10000001101");
        assert_eq!(br.remaining(), 0);

        let mut br = ByteReader::new(&x);
        assert_eq!(br.bits(0).unwrap().len(), 0);
        assert_eq!(br.loc(), 0);
        assert!(br.bits(17).is_err());
    }
}
