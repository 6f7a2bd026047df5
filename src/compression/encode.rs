use log::{debug, trace};

use crate::bitstream::bitseq::BitSequence;
use crate::bitstream::bytewriter::ByteWriter;
use crate::error::{HefError, Result};
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::huffman::CodeTree;
use crate::huffman_coding::symbol::Symbol;

use super::varint::write_num;

/// Encode a sequence of symbols into a HEF container.
pub fn encode<S: Symbol>(data: &[S]) -> Result<Vec<u8>> {
    // Build the codes from the symbol frequencies
    let tree = CodeTree::from_symbols(data);
    let mut table = tree.make_table();

    // A lone symbol has an empty code. Give it one bit so the data still counts occurrences.
    if table.widen_empty_code() {
        debug!("Single symbol alphabet, using a one bit code");
    }

    let code = encode_seq(data, &table)?;
    serialise(&table, &code)
}

/// Concatenate the code of every symbol of `data`.
pub fn encode_seq<S: Symbol>(data: &[S], table: &CodeTable<S>) -> Result<BitSequence> {
    let mut seq = BitSequence::with_capacity(data.len());
    for sym in data {
        match table.get(sym) {
            Some(code) => seq.push_sequence(code),
            None => {
                return Err(HefError::MissingSymbol {
                    symbol: format!("{:?}", sym),
                })
            }
        }
    }
    debug!("Encoded {} symbols into {} bits", data.len(), seq.len());
    Ok(seq)
}

/// Serialise the code table and the encoded data.
///
/// Layout: alphabet size, alphabet, one length byte per symbol, the concatenated codes padded
/// to a byte, then the data bit count as whole bytes plus a remainder and the padded data bits.
pub fn serialise<S: Symbol>(table: &CodeTable<S>, code: &BitSequence) -> Result<Vec<u8>> {
    let arrays = table.to_arrays()?;
    let n = arrays.alphabet.len();

    // Close enough to avoid most reallocations
    let size = 2 * 9 + 1 + n * (S::WIDTH + 1) + (arrays.alphabet_bits.len() + code.len()) / 8 + 2;
    let mut bw = ByteWriter::new(size);

    // The tree
    write_num(&mut bw, n as u64);
    let mut raw = Vec::with_capacity(n * S::WIDTH);
    arrays.alphabet.iter().for_each(|&sym| sym.put(&mut raw));
    bw.out_bytes(&raw);
    bw.out_bytes(&arrays.lengths);
    trace!("Alphabet written, alphabet bits start at byte {}", bw.loc());
    bw.out_seq(&arrays.alphabet_bits);

    // The data
    let bits = code.len();
    write_num(&mut bw, (bits / 8) as u64);
    bw.out8((bits % 8) as u8);
    trace!("Data bits start at byte {}", bw.loc());
    bw.out_seq(code);

    debug!(
        "Serialised {} symbols, {} code bits and {} data bits into {} bytes",
        n,
        arrays.alphabet_bits.len(),
        bits,
        bw.output.len()
    );
    Ok(bw.output)
}
