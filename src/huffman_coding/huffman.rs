use log::{debug, trace, warn};

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::code_table::CodeTable;
use super::symbol::Symbol;
use crate::bitstream::bitseq::BitSequence;
use crate::error::{HefError, Result};
use crate::tools::freq_count::{freqs, sorted_freqs, FrequencyMap};

/// A node of the code tree. Each node owns its children.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Node<S> {
    /// Holds one symbol, no children.
    Leaf(S),
    /// Holds left (0) and/or right (1) children. An internal node with no children only
    /// exists as the root of an empty tree or while a path is being inserted.
    Kids {
        left: Option<Box<Node<S>>>,
        right: Option<Box<Node<S>>>,
    },
}

impl<S> Node<S> {
    /// Create an internal node without children.
    fn empty() -> Self {
        Node::Kids {
            left: None,
            right: None,
        }
    }

    /// Create an internal node with both children.
    fn join(left: Node<S>, right: Node<S>) -> Self {
        Node::Kids {
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
}

/// Heap entry used while building the tree from frequencies.
struct Weighted<S> {
    weight: u64,
    seq: u64,
    node: Node<S>,
}

impl<S> PartialEq for Weighted<S> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}
impl<S> Eq for Weighted<S> {}

impl<S> PartialOrd for Weighted<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Weighted<S> {
    /// Sort by decreasing weight, then decreasing sequence number, so the max-heap
    /// pops the lightest and oldest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A Huffman code tree. Paths from the root spell codes: left is 0, right is 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree<S> {
    root: Node<S>,
}

impl<S: Symbol> CodeTree<S> {
    /// Build the tree for a sequence of symbols.
    pub fn from_symbols(data: &[S]) -> Self {
        Self::from_frequencies(&freqs(data))
    }

    /// Build the tree from symbol frequencies.
    ///
    /// Leaves enter the heap in ascending symbol order and every entry gets a sequence number,
    /// so ties on weight always resolve the same way. The first entry popped becomes the left
    /// child.
    pub fn from_frequencies(freqs: &FrequencyMap<S>) -> Self {
        let mut seq = 0;
        let mut heap: BinaryHeap<Weighted<S>> = sorted_freqs(freqs)
            .into_iter()
            .map(|(sym, weight)| {
                seq += 1;
                Weighted {
                    weight,
                    seq,
                    node: Node::Leaf(sym),
                }
            })
            .collect();

        // Pare the heap down to a single root
        while heap.len() > 1 {
            let (left, right) = match (heap.pop(), heap.pop()) {
                (Some(left), Some(right)) => (left, right),
                _ => unreachable!("heap holds at least two entries"),
            };
            seq += 1;
            heap.push(Weighted {
                weight: left.weight + right.weight,
                seq,
                node: Node::join(left.node, right.node),
            });
        }

        let root = heap.pop().map(|w| w.node).unwrap_or_else(Node::empty);
        debug!("Built code tree over {} symbols", freqs.len());
        CodeTree { root }
    }

    /// Rebuild a tree from a code table by inserting the path of every entry.
    pub fn from_table(table: &CodeTable<S>) -> Result<Self> {
        let mut tree = CodeTree { root: Node::empty() };
        for (&sym, code) in table.iter() {
            tree.insert_path(sym, code)?;
        }
        Ok(tree)
    }

    /// Walk (and create) the path spelled by `code`, then put `sym` at its end.
    fn insert_path(&mut self, sym: S, code: &BitSequence) -> Result<()> {
        let conflict = || HefError::ConflictingCode {
            symbol: format!("{:?}", sym),
        };
        let mut node = &mut self.root;
        for bit in code.iter() {
            node = match node {
                Node::Leaf(_) => return Err(conflict()),
                Node::Kids { left, right } => {
                    let slot = if bit { right } else { left };
                    slot.get_or_insert_with(|| Box::new(Node::empty())).as_mut()
                }
            };
        }
        // The end of the path must be a fresh node
        if !matches!(*node, Node::Kids { left: None, right: None }) {
            return Err(conflict());
        }
        *node = Node::Leaf(sym);
        Ok(())
    }

    /// Derive the code table: every leaf maps to the path that reaches it.
    pub fn make_table(&self) -> CodeTable<S> {
        let mut table = CodeTable::new();
        let mut code = BitSequence::new();
        build_table(&mut table, &mut code, &self.root);
        table
    }

    /// True if the root itself is a leaf (a one symbol alphabet).
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Decode a stream of bits, appending every symbol found to `out`.
    ///
    /// The stream should be a whole number of codes. A stream that stops part way through a
    /// code is accepted and the partial code dropped.
    pub fn decode_into<I>(&self, bits: I, out: &mut Vec<S>) -> Result<()>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut node = &self.root;
        let mut depth = 0;
        for (bit_index, bit) in bits.into_iter().enumerate() {
            let next = match node {
                Node::Kids { left, right } => {
                    if bit {
                        right.as_deref()
                    } else {
                        left.as_deref()
                    }
                }
                // Only a single leaf root can get here: it has no codes to follow
                Node::Leaf(_) => None,
            };
            node = match next {
                Some(child) => child,
                None => return Err(HefError::InvalidCode { bit_index }),
            };
            depth += 1;

            if let Node::Leaf(sym) = node {
                out.push(*sym);
                node = &self.root;
                depth = 0;
            }
        }
        if depth > 0 {
            warn!("Data ended {} bits into a code, dropped them", depth);
        }
        Ok(())
    }
}

/// Recursively walk the tree, recording the path to each leaf. The path is pushed before
/// descending and popped on return, so `code` always holds the path to `node`.
fn build_table<S: Symbol>(table: &mut CodeTable<S>, code: &mut BitSequence, node: &Node<S>) {
    match node {
        Node::Leaf(sym) => {
            trace!("{:?} -> {}", sym, code);
            table.insert(*sym, code.clone());
        }
        Node::Kids { left, right } => {
            if let Some(left) = left {
                code.push_bit(false);
                build_table(table, code, left);
                code.pop();
            }
            if let Some(right) = right {
                code.push_bit(true);
                build_table(table, code, right);
                code.pop();
            }
        }
    }
}
