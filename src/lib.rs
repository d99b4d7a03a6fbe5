//! # Static Huffman coding
//!
//! *Byte-level prefix codes in a self-describing container.*
//!
//! ## Intuition First
//!
//! Text rarely uses all 256 byte values equally. If `e` turns up forty times
//! as often as `q`, spending the same eight bits on each is wasteful. Give
//! frequent bytes short bit strings and rare ones long bit strings, and the
//! total shrinks, as long as the decoder can always tell where one string
//! ends and the next begins.
//!
//! Huffman's construction guarantees that: every code is a path from the
//! root of a binary tree to a leaf, so no code is a prefix of another.
//!
//! ## Pipeline
//!
//! ```text
//! encode: bytes -> FrequencyTable -> HuffmanTree -> CodeTable -> BitPacker -> container
//! decode: container -> FrequencyTable -> HuffmanTree -> CodeTable -> BitUnpacker -> bytes
//! ```
//!
//! The container stores the frequency table, not the tree. Tree
//! construction is deterministic, so the decoder arrives at the same codes.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(n + k \log k)$ to encode `n` bytes over `k` distinct symbols.
//! - **Space**: the whole input is buffered; frequencies must be complete
//!   before the tree can be built.
//!
//! ## Failure Modes
//!
//! 1. **No gain**: small or near-uniform inputs cost more in table than they
//!    save in payload. [`encode`] refuses with [`Error::WouldNotShrink`].
//! 2. **Reserved byte**: byte 13 marks end of stream. An input containing it
//!    as data decodes only up to its first occurrence.
//!
//! ## Example
//!
//! ```
//! let input = b"abracadabra, abracadabra, abracadabra, abracadabra!".repeat(4);
//! let container = huff::encode(&input)?;
//! assert!(container.len() < input.len());
//! assert_eq!(huff::decode(&container)?, input);
//! # Ok::<(), huff::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bits;
pub mod code;
pub mod container;
pub mod error;
pub mod format;
pub mod frequency;
pub mod guard;
pub mod tree;

pub use bits::{BitPacker, BitUnpacker};
pub use code::{CodeTable, Codeword};
pub use container::{decode, encode, encode_with, inspect, EncodeOptions, Header};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;
