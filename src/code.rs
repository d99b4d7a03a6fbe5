//! Codewords and the symbol <-> codeword tables derived from a tree.

use std::collections::HashMap;
use std::fmt;

use crate::tree::{HuffmanTree, Node};

/// A root-to-leaf path: `0` for left, `1` for right.
///
/// Bits are held right-aligned in `bits`; the first bit of the path is the
/// most significant of the `len` low bits. With four byte counts and at
/// most 256 leaves a tree is far shallower than 64 levels.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Codeword {
    bits: u64,
    len: u8,
}

impl Codeword {
    /// Maximum number of bits a codeword can hold.
    ///
    /// Never reached: a leaf at depth `d` needs a total weight of at least
    /// Fib(d + 1), and 4-byte counts cap real trees at depth 46.
    pub const MAX_LEN: u8 = 64;

    /// The empty path.
    pub const EMPTY: Codeword = Codeword { bits: 0, len: 0 };

    /// Build a codeword from its low `len` bits.
    pub fn new(bits: u64, len: u8) -> Self {
        debug_assert!(len <= Self::MAX_LEN);
        let mask = if len == 64 { u64::MAX } else { (1u64 << len) - 1 };
        Self {
            bits: bits & mask,
            len,
        }
    }

    /// This codeword extended by one bit.
    pub fn push(self, bit: bool) -> Self {
        debug_assert!(self.len < Self::MAX_LEN, "codeword longer than 64 bits");
        Self {
            bits: (self.bits << 1) | u64::from(bit),
            len: self.len + 1,
        }
    }

    /// Number of bits.
    pub fn len(&self) -> u8 {
        self.len
    }

    /// True for the empty path.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw right-aligned bits.
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Bit `i`, counting from the start of the path.
    pub fn bit(&self, i: u8) -> bool {
        debug_assert!(i < self.len);
        (self.bits >> (self.len - 1 - i)) & 1 == 1
    }

    /// Bits in path order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }

    /// Whether `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        if self.len == 0 {
            return true;
        }
        self.len <= other.len && (other.bits >> (other.len - self.len)) == self.bits
    }
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codeword(")?;
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        write!(f, ")")
    }
}

/// Bijection between symbols and codewords for one tree.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Codeword>; 256],
    symbols: HashMap<Codeword, u8>,
    max_len: u8,
}

impl CodeTable {
    /// Walk `tree` depth first and record each leaf's path.
    ///
    /// A tree that is a single leaf gets the one-bit codeword `0`.
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut table = Self {
            codes: [None; 256],
            symbols: HashMap::new(),
            max_len: 0,
        };
        table.visit(tree.root(), Codeword::EMPTY);
        log::trace!(
            "code lengths: {:?}",
            table
                .iter()
                .map(|(symbol, code)| (symbol, code.len()))
                .collect::<Vec<_>>()
        );
        table
    }

    fn visit(&mut self, node: &Node, prefix: Codeword) {
        match node {
            Node::Leaf { symbol, .. } => {
                let code = if prefix.is_empty() {
                    Codeword::new(0, 1)
                } else {
                    prefix
                };
                self.codes[*symbol as usize] = Some(code);
                self.symbols.insert(code, *symbol);
                self.max_len = self.max_len.max(code.len());
            }
            Node::Internal { left, right, .. } => {
                self.visit(left, prefix.push(false));
                self.visit(right, prefix.push(true));
            }
        }
    }

    /// Codeword for `symbol`, if it is in the tree.
    pub fn codeword(&self, symbol: u8) -> Option<Codeword> {
        self.codes[symbol as usize]
    }

    /// Symbol whose codeword is exactly `code`.
    pub fn symbol(&self, code: &Codeword) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> u8 {
        self.max_len
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if the table holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// `(symbol, codeword)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Codeword)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.map(|code| (symbol as u8, code)))
    }
}
