use log::{debug, trace};

use crate::bitstream::bitseq::BitSequence;
use crate::bitstream::bytereader::ByteReader;
use crate::error::{HefError, Result};
use crate::huffman_coding::code_table::{CodeTable, TableArrays};
use crate::huffman_coding::huffman::CodeTree;
use crate::huffman_coding::symbol::Symbol;

use super::varint::read_size;

/// A parsed HEF container: the code table arrays and the encoded data bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<S> {
    pub arrays: TableArrays<S>,
    pub data: BitSequence,
}

/// What a HEF container declares about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HefHeader {
    /// Number of distinct symbols.
    pub alphabet_size: usize,
    /// Sum of the code lengths.
    pub code_bits: usize,
    /// Number of encoded data bits.
    pub data_bits: usize,
    /// Size of the whole container in bytes.
    pub blob_len: usize,
}

/// Decode a HEF container, appending the symbols to `out`. Nothing is appended unless the
/// whole container decodes.
pub fn decode<S: Symbol>(blob: &[u8], out: &mut Vec<S>) -> Result<()> {
    let container = deserialise::<S>(blob)?;
    let table = CodeTable::from_arrays(&container.arrays)?;
    let tree = CodeTree::from_table(&table)?;

    let mut decoded = Vec::new();
    tree.decode_into(container.data.iter(), &mut decoded)?;
    debug!("Decoded {} symbols", decoded.len());

    out.append(&mut decoded);
    Ok(())
}

/// Decode a HEF container into a new vec.
pub fn decode_to_vec<S: Symbol>(blob: &[u8]) -> Result<Vec<S>> {
    let mut out = Vec::new();
    decode(blob, &mut out)?;
    Ok(out)
}

/// Parse a container and report its declared sizes.
pub fn inspect<S: Symbol>(blob: &[u8]) -> Result<HefHeader> {
    let container = deserialise::<S>(blob)?;
    Ok(HefHeader {
        alphabet_size: container.arrays.alphabet.len(),
        code_bits: container.arrays.alphabet_bits.len(),
        data_bits: container.data.len(),
        blob_len: blob.len(),
    })
}

/// Split a blob into the code table arrays and the data bits.
pub fn deserialise<S: Symbol>(blob: &[u8]) -> Result<Container<S>> {
    let mut br = ByteReader::new(blob);
    let arrays = deserialise_arrays(&mut br)?;
    let data = deserialise_data(&mut br)?;
    if br.remaining() > 0 {
        debug!("Ignoring {} bytes after the data", br.remaining());
    }
    Ok(Container { arrays, data })
}

/// Read the alphabet, the code lengths and the concatenated codes.
fn deserialise_arrays<S: Symbol>(br: &mut ByteReader<'_>) -> Result<TableArrays<S>> {
    // Read the number of symbols in the alphabet
    let n = read_size(br)?;

    // Read the alphabet. Take all its bytes first so a bogus count fails before we allocate.
    let start = br.loc();
    let raw_len = n
        .checked_mul(S::WIDTH)
        .ok_or(HefError::SizeOverflow(n as u64))?;
    let raw = br.bytes(raw_len)?;
    let alphabet = raw
        .chunks_exact(S::WIDTH)
        .enumerate()
        .map(|(i, bytes)| {
            S::take(bytes).ok_or(HefError::InvalidSymbol {
                offset: start + i * S::WIDTH,
            })
        })
        .collect::<Result<Vec<S>>>()?;

    // Read the code lengths, one byte each
    let lengths = br.bytes(n)?.to_vec();

    // Their sum is the size of the concatenated codes
    let total: usize = lengths.iter().map(|&len| len as usize).sum();
    let alphabet_bits = br.bits(total)?;

    trace!("N: {}", n);
    trace!("Alphabet: {:?}", alphabet);
    trace!("Lengths : {:?}", lengths);
    trace!("Alphabits: {}", alphabet_bits);

    Ok(TableArrays {
        alphabet,
        lengths,
        alphabet_bits,
    })
}

/// Read the data bit count and the data bits.
fn deserialise_data(br: &mut ByteReader<'_>) -> Result<BitSequence> {
    let whole_bytes = read_size(br)?;
    let remainder = br.byte()?;
    if remainder > 7 {
        return Err(HefError::InvalidRemainder(remainder));
    }
    let n_bits = whole_bytes
        .checked_mul(8)
        .and_then(|bits| bits.checked_add(remainder as usize))
        .ok_or(HefError::SizeOverflow(whole_bytes as u64))?;
    trace!("M: {}", n_bits);
    br.bits(n_bits)
}

#[cfg(test)]
mod test {
    use super::{decode, decode_to_vec, deserialise, inspect, HefHeader};
    use crate::compression::encode::encode;
    use crate::error::HefError;

    #[test]
    fn decode_layout_test() {
        let blob = vec![
            0, 3, b'a', b'b', b'c', 1, 2, 2, 0b1010_0000, 0, 1, 2, 0b1111_0101, 0,
        ];
        assert_eq!(decode_to_vec::<u8>(&blob).unwrap(), b"aaaabbc".to_vec());
        assert_eq!(
            inspect::<u8>(&blob).unwrap(),
            HefHeader {
                alphabet_size: 3,
                code_bits: 5,
                data_bits: 10,
                blob_len: 14,
            }
        );
    }

    #[test]
    fn decode_appends_test() {
        let blob = encode("xyz".as_bytes()).unwrap();
        let mut out = b"abc".to_vec();
        decode(&blob, &mut out).unwrap();
        assert_eq!(out, b"abcxyz".to_vec());
    }

    #[test]
    fn empty_container_test() {
        let header = inspect::<u8>(&[0, 0, 0, 0, 0]).unwrap();
        assert_eq!(header.alphabet_size, 0);
        assert_eq!(header.data_bits, 0);
        assert!(decode_to_vec::<u8>(&[0, 0, 0, 0, 0]).unwrap().is_empty());
    }

    #[test]
    fn empty_code_container_test() {
        // One symbol with a zero length code and no data
        let blob = [0, 1, b'q', 0, 0, 0, 0];
        assert!(decode_to_vec::<u8>(&blob).unwrap().is_empty());
        // ...and with data it cannot be decoded
        let blob = [0, 1, b'q', 0, 0, 0, 1, 0];
        assert!(matches!(
            decode_to_vec::<u8>(&blob),
            Err(HefError::InvalidCode { bit_index: 0 })
        ));
    }

    #[test]
    fn malformed_tag_test() {
        assert!(matches!(
            decode_to_vec::<u8>(&[7, 0]),
            Err(HefError::MalformedHeader { tag: 7, offset: 0 })
        ));
        let mut blob = encode("hello".as_bytes()).unwrap();
        // Corrupt the data size tag, which follows the alphabet section
        let data_tag = blob.len() - 5;
        blob[data_tag] = 9;
        assert!(matches!(
            decode_to_vec::<u8>(&blob),
            Err(HefError::MalformedHeader { tag: 9, .. })
        ));
    }

    #[test]
    fn truncated_test() {
        let blob = encode("hello, world".as_bytes()).unwrap();
        for len in 0..blob.len() {
            assert!(
                matches!(
                    decode_to_vec::<u8>(&blob[..len]),
                    Err(HefError::Truncated { .. })
                ),
                "prefix of {} bytes decoded",
                len
            );
        }
        assert!(decode_to_vec::<u8>(&blob).is_ok());
    }

    #[test]
    fn failed_decode_leaves_output_test() {
        let blob = encode("hello".as_bytes()).unwrap();
        let mut out = b"keep".to_vec();
        assert!(decode(&blob[..blob.len() - 1], &mut out).is_err());
        assert_eq!(out, b"keep".to_vec());
    }

    #[test]
    fn huge_alphabet_test() {
        // Declares 2^32 symbols of 8 bytes but holds none
        let blob = [3, 0, 0, 0, 0, 1, 0, 0, 0];
        assert!(decode_to_vec::<u64>(&blob).is_err());
    }

    #[test]
    fn bad_remainder_test() {
        let blob = [0, 0, 0, 0, 8];
        assert!(matches!(
            decode_to_vec::<u8>(&blob),
            Err(HefError::InvalidRemainder(8))
        ));
    }

    #[test]
    fn invalid_symbol_test() {
        let mut blob = vec![0, 1];
        blob.extend_from_slice(&0xD800_u32.to_le_bytes());
        blob.extend_from_slice(&[1, 0, 0, 0, 0]);
        assert!(matches!(
            decode_to_vec::<char>(&blob),
            Err(HefError::InvalidSymbol { offset: 2 })
        ));
    }

    #[test]
    fn trailing_bytes_test() {
        let mut blob = encode("abc".as_bytes()).unwrap();
        blob.extend_from_slice(&[0xde, 0xad]);
        assert_eq!(decode_to_vec::<u8>(&blob).unwrap(), b"abc".to_vec());
    }

    #[test]
    fn deserialise_test() {
        let blob = encode("aaaabbc".as_bytes()).unwrap();
        let container = deserialise::<u8>(&blob).unwrap();
        assert_eq!(container.arrays.alphabet, b"abc".to_vec());
        assert_eq!(container.arrays.lengths, vec![1, 2, 2]);
        assert_eq!(container.data.to_string(), "1111010100");
    }
}
