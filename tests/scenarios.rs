use hefzip::compression::decode::deserialise;
use hefzip::{decode, decode_to_vec, encode, inspect, CodeTree, HefError};

#[test]
fn skewed_input() {
    let data = b"aaaabbc";
    let table = CodeTree::from_symbols(data).make_table();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(&b'a').unwrap().len(), 1);
    assert_eq!(table.get(&b'b').unwrap().len(), 2);
    assert_eq!(table.get(&b'c').unwrap().len(), 2);

    let blob = encode(data).unwrap();
    let header = inspect::<u8>(&blob).unwrap();
    assert_eq!(header.alphabet_size, 3);
    // 4 * 1 + 2 * 2 + 1 * 2
    assert_eq!(header.data_bits, 10);
    assert_eq!(decode_to_vec::<u8>(&blob).unwrap(), data.to_vec());
}

#[test]
fn empty_input() {
    let blob = encode::<u8>(&[]).unwrap();
    let header = inspect::<u8>(&blob).unwrap();
    assert_eq!(header.alphabet_size, 0);
    assert_eq!(header.data_bits, 0);
    assert!(decode_to_vec::<u8>(&blob).unwrap().is_empty());
}

#[test]
fn single_symbol_input() {
    let blob = encode(b"aaaa").unwrap();
    let container = deserialise::<u8>(&blob).unwrap();
    assert_eq!(container.arrays.alphabet, vec![b'a']);
    assert_eq!(container.arrays.lengths, vec![1]);
    assert_eq!(container.data.len(), 4);
    assert_eq!(decode_to_vec::<u8>(&blob).unwrap(), b"aaaa".to_vec());
}

#[test]
fn decode_into_existing_output() {
    let mut out = vec![1u32, 2, 3];
    decode(&encode(&[7u32, 7, 8]).unwrap(), &mut out).unwrap();
    assert_eq!(out, vec![1, 2, 3, 7, 7, 8]);
}

#[test]
fn malformed_size_tag() {
    let mut blob = encode(b"abracadabra").unwrap();
    blob[0] = 4;
    assert!(matches!(
        decode_to_vec::<u8>(&blob),
        Err(HefError::MalformedHeader { tag: 4, offset: 0 })
    ));
}

#[test]
fn truncated_blob() {
    let blob = encode(b"abracadabra").unwrap();
    let mut out = Vec::new();
    let err = decode::<u8>(&blob[..blob.len() - 1], &mut out).unwrap_err();
    assert!(matches!(err, HefError::Truncated { .. }));
    assert!(out.is_empty());
    assert!(matches!(
        inspect::<u8>(&blob[..3]),
        Err(HefError::Truncated { .. })
    ));
}

#[test]
fn large_input() {
    // Quadratic residues mod 251, so about half the byte values
    let data: Vec<u8> = (0..100_000u64).map(|i| (i * i % 251) as u8).collect();
    let blob = encode(&data).unwrap();
    assert!(blob.len() < data.len());
    assert_eq!(decode_to_vec::<u8>(&blob).unwrap(), data);
}
