//! Huffman tree construction.
//!
//! Encoder and decoder each rebuild the tree from the same frequency table,
//! so construction must be fully deterministic. Ties on weight are broken by
//! insertion order: leaves are queued in ascending symbol order, and each
//! merged node is queued after everything already in the heap.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A single symbol.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Occurrence count.
        weight: u64,
    },
    /// Two owned subtrees; weight is their sum.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Box<Node>,
        /// Sum of both children's weights.
        weight: u64,
    },
}

impl Node {
    /// Weight of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        let weight = left.weight() + right.weight();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
        }
    }
}

/// Heap entry ordered by `(weight, seq)`, smallest first.
struct Queued {
    seq: u32,
    node: Node,
}

impl Queued {
    fn key(&self) -> (u64, u32) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Queued {}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key()) // Min-priority queue
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A Huffman tree built from a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the tree for `table`.
    ///
    /// A table with one entry yields a tree that is a single leaf; the code
    /// table assigns it a one-bit codeword.
    ///
    /// # Errors
    /// Returns `Error::EmptyTable` if `table` has no entries.
    pub fn build(table: &FrequencyTable) -> Result<Self> {
        let mut heap = BinaryHeap::with_capacity(table.len());
        let mut seq = 0u32;
        for (symbol, count) in table.iter() {
            heap.push(Queued {
                seq,
                node: Node::Leaf {
                    symbol,
                    weight: u64::from(count),
                },
            });
            seq += 1;
        }

        loop {
            let first = heap.pop().ok_or(Error::EmptyTable)?;
            let Some(second) = heap.pop() else {
                return Ok(Self { root: first.node });
            };
            heap.push(Queued {
                seq,
                node: Node::merge(first.node, second.node),
            });
            seq += 1;
        }
    }

    /// Root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Internal { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }
}
