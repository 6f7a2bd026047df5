use std::fmt::{Display, Formatter};

/// Storage unit for the bits.
pub type Block = u64;
/// Bits per block.
pub const BLOCK_BITS: usize = Block::BITS as usize;
/// Mask for the first (most significant) bit of a block.
const LEFTMOST: Block = 1 << (BLOCK_BITS - 1);

/// A growable sequence of bits packed most significant bit first into 64 bit blocks.
///
/// Bit 0 is the top bit of block 0. There is always at least one block, even when
/// the sequence is empty. Bits past the end of the sequence are always zero.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitSequence {
    /// The blocks holding the bits.
    blocks: Vec<Block>,
    /// Count of valid bits in the last block, in [0, BLOCK_BITS]. Zero only when empty.
    count: usize,
}

impl BitSequence {
    /// Create an empty bit sequence.
    pub fn new() -> Self {
        Self {
            blocks: vec![0],
            count: 0,
        }
    }

    /// Create an empty bit sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        let mut seq = Self::new();
        seq.reserve(bits);
        seq
    }

    /// Reserve room for at least `bits` more bits.
    pub fn reserve(&mut self, bits: usize) {
        self.blocks.reserve(bits / BLOCK_BITS + 1);
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) {
        if self.count == BLOCK_BITS {
            // Ran out of room in the current block
            self.blocks.push(if bit { LEFTMOST } else { 0 });
            self.count = 1;
        } else {
            if bit {
                *self.last_block() |= LEFTMOST >> self.count;
            }
            self.count += 1;
        }
        debug_assert!(self.count > 0 && self.count <= BLOCK_BITS);
    }

    /// Append the top `num_bits` bits of `byte`, most significant first. Bits below
    /// `num_bits` are ignored.
    pub fn push_byte(&mut self, byte: u8, num_bits: usize) {
        assert!(num_bits <= 8, "push_byte takes at most 8 bits, got {}", num_bits);
        if num_bits == 0 {
            return;
        }
        // Mask off the unused low bits, then move the byte to the top of a block
        let byte = byte & (0xff_u8 << (8 - num_bits));
        let block = (byte as Block) << (BLOCK_BITS - 8);

        if self.count + num_bits <= BLOCK_BITS {
            // Fits in the current block
            *self.last_block() |= block >> self.count;
            self.count += num_bits;
        } else {
            // Split across the current block and a new one
            let fit = BLOCK_BITS - self.count;
            if fit == 0 {
                self.blocks.push(block);
                self.count = num_bits;
            } else {
                *self.last_block() |= block >> self.count;
                self.blocks.push(block << fit);
                self.count = num_bits - fit;
            }
        }
        debug_assert!(self.count > 0 && self.count <= BLOCK_BITS);
    }

    /// Append all the bits of `other`.
    pub fn push_sequence(&mut self, other: &BitSequence) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.clone_from(other);
            return;
        }

        // The offset of the next free bit in our last block. Constant for the whole copy.
        let offset = self.count;
        let last_fits = offset + other.count <= BLOCK_BITS;

        if other.blocks.len() == 1 && last_fits {
            // The single block of other fits in our last block
            *self.last_block() |= other.blocks[0] >> offset;
            self.count += other.count;
        } else {
            // Each block of other is split: the top `fit` bits finish our last block, the
            // remaining `offset` bits start a new block.
            let fit = BLOCK_BITS - offset;
            let last = other.blocks.len() - 1;
            self.blocks.reserve(other.blocks.len());
            for (i, &block) in other.blocks.iter().enumerate() {
                if fit > 0 {
                    *self.last_block() |= block >> offset;
                }
                // The last block only needs a new block when its bits spill over
                if i != last || !last_fits {
                    self.blocks.push(block << fit);
                }
            }
            self.count = if last_fits {
                offset + other.count
            } else {
                other.count - fit
            };
        }
        debug_assert!(self.count > 0 && self.count <= BLOCK_BITS);
    }

    /// Remove the last bit. Panics if the sequence is empty.
    pub fn pop(&mut self) {
        assert!(!self.is_empty(), "pop from an empty bit sequence");
        self.count -= 1;
        if self.count == 0 && self.blocks.len() > 1 {
            // The block has no bits left, drop it. The previous block is full.
            self.blocks.pop();
            self.count = BLOCK_BITS;
        } else {
            // Clear the bit we just released
            *self.last_block() &= !(LEFTMOST >> self.count);
        }
    }

    /// Return bit `index`. Panics if `index >= len()`.
    pub fn at(&self, index: usize) -> bool {
        match self.get(index) {
            Some(bit) => bit,
            None => panic!(
                "bit index {} out of range for a sequence of {} bits",
                index,
                self.len()
            ),
        }
    }

    /// Return bit `index`, or None if it is out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len() {
            return None;
        }
        Some(self.blocks[index / BLOCK_BITS] & (LEFTMOST >> (index % BLOCK_BITS)) != 0)
    }

    /// Number of bits in the sequence.
    pub fn len(&self) -> usize {
        (self.blocks.len() - 1) * BLOCK_BITS + self.count
    }

    /// True if the sequence holds no bits.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over the bits from first to last.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            seq: self,
            index: 0,
            end: self.len(),
        }
    }

    /// Pack the bits most significant first into bytes. The last byte is zero padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        let n_bytes = (self.len() + 7) / 8;
        self.blocks
            .iter()
            .flat_map(|block| block.to_be_bytes())
            .take(n_bytes)
            .collect()
    }

    fn last_block(&mut self) -> &mut Block {
        // There is always at least one block
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }
}

impl Default for BitSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for BitSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut seq = BitSequence::new();
        seq.extend(iter);
        seq
    }
}

impl Extend<bool> for BitSequence {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        iter.into_iter().for_each(|bit| self.push_bit(bit));
    }
}

impl<'a> IntoIterator for &'a BitSequence {
    type Item = bool;
    type IntoIter = Bits<'a>;
    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

/// Iterator over the bits of a BitSequence. Restartable by calling iter() again.
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    seq: &'a BitSequence,
    index: usize,
    end: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;
    fn next(&mut self) -> Option<bool> {
        if self.index == self.end {
            return None;
        }
        let bit = self.seq.at(self.index);
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Bits<'_> {}
