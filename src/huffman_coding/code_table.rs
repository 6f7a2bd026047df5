use log::trace;

use std::collections::btree_map::{BTreeMap, Iter};

use super::symbol::Symbol;
use crate::bitstream::bitseq::BitSequence;
use crate::error::{HefError, Result};

/// Maps each symbol to its code. Kept in symbol order so serialization is reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, BitSequence>,
}

/// The table as stored in a HEF container: the alphabet, one length byte per symbol and
/// every code concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableArrays<S> {
    pub alphabet: Vec<S>,
    pub lengths: Vec<u8>,
    pub alphabet_bits: BitSequence,
}

impl<S: Symbol> CodeTable<S> {
    pub fn new() -> Self {
        Self {
            codes: BTreeMap::new(),
        }
    }

    /// Set the code for a symbol, returning the previous code if there was one.
    pub fn insert(&mut self, sym: S, code: BitSequence) -> Option<BitSequence> {
        self.codes.insert(sym, code)
    }

    pub fn get(&self, sym: &S) -> Option<&BitSequence> {
        self.codes.get(sym)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, S, BitSequence> {
        self.codes.iter()
    }

    /// A tree of one leaf gives its symbol an empty code, which cannot be counted in the data.
    /// Give it the one bit code 0 instead. Returns true if the table changed.
    pub fn widen_empty_code(&mut self) -> bool {
        if self.codes.len() != 1 {
            return false;
        }
        match self.codes.values_mut().next() {
            Some(code) if code.is_empty() => {
                code.push_bit(false);
                true
            }
            _ => false,
        }
    }

    /// Split the table into the arrays stored in the container.
    pub fn to_arrays(&self) -> Result<TableArrays<S>> {
        let total_bits = self.codes.values().map(BitSequence::len).sum();
        let mut arrays = TableArrays {
            alphabet: Vec::with_capacity(self.codes.len()),
            lengths: Vec::with_capacity(self.codes.len()),
            alphabet_bits: BitSequence::with_capacity(total_bits),
        };
        for (&sym, code) in &self.codes {
            let len = u8::try_from(code.len()).map_err(|_| HefError::CodeTooLong {
                symbol: format!("{:?}", sym),
                bits: code.len(),
            })?;
            arrays.alphabet.push(sym);
            arrays.lengths.push(len);
            arrays.alphabet_bits.push_sequence(code);
        }
        trace!("Lengths : {:?}", arrays.lengths);
        trace!("Alphabits: {}", arrays.alphabet_bits);
        Ok(arrays)
    }

    /// Rebuild the table from the container arrays. Every symbol needs a length and the
    /// alphabet bits must hold at least the sum of the lengths.
    pub fn from_arrays(arrays: &TableArrays<S>) -> Result<Self> {
        if arrays.alphabet.len() != arrays.lengths.len() {
            return Err(HefError::LengthCountMismatch {
                symbols: arrays.alphabet.len(),
                lengths: arrays.lengths.len(),
            });
        }
        let needed: usize = arrays.lengths.iter().map(|&len| len as usize).sum();
        if arrays.alphabet_bits.len() < needed {
            return Err(HefError::MissingCodeBits {
                needed,
                available: arrays.alphabet_bits.len(),
            });
        }

        let mut table = CodeTable::new();
        let mut bits = arrays.alphabet_bits.iter();
        for (&sym, &len) in arrays.alphabet.iter().zip(&arrays.lengths) {
            let code: BitSequence = bits.by_ref().take(len as usize).collect();
            // A symbol listed twice would get two paths
            if table.insert(sym, code).is_some() {
                return Err(HefError::ConflictingCode {
                    symbol: format!("{:?}", sym),
                });
            }
        }
        Ok(table)
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitSequence> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !is_prefix(a, b))
        })
    }
}

impl<'a, S> IntoIterator for &'a CodeTable<S> {
    type Item = (&'a S, &'a BitSequence);
    type IntoIter = Iter<'a, S, BitSequence>;
    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

/// True if `a` is a prefix of `b`.
fn is_prefix(a: &BitSequence, b: &BitSequence) -> bool {
    a.len() <= b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}
