//! Error types for Huffman container encoding and decoding.

use thiserror::Error;

/// Error variants for codec operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not start with the container magic value.
    ///
    /// `found` is `None` when the input is shorter than the magic itself.
    #[error("input is not a huff container (magic {found:?})")]
    NotEncoded {
        /// The first four bytes, read as a little-endian integer.
        found: Option<u32>,
    },

    /// The container would be at least as large as the input.
    #[error("container would not shrink input ({estimated} bytes >= {original} bytes)")]
    WouldNotShrink {
        /// Input length in bytes.
        original: usize,
        /// Exact container length had compression gone ahead.
        estimated: usize,
    },

    /// The symbol count field is missing.
    #[error("container header is truncated")]
    TruncatedHeader,

    /// The header declares more frequency entries than the container holds.
    #[error("container declares {declared} entries but only {available} fit")]
    TruncatedTable {
        /// Entry count from the header.
        declared: u32,
        /// Number of complete entries actually present.
        available: usize,
    },

    /// A symbol appears twice in the stored frequency table.
    #[error("symbol {0} appears more than once in the frequency table")]
    DuplicateSymbol(u8),

    /// A stored frequency entry has a count of zero.
    #[error("symbol {0} has a zero count")]
    ZeroCount(u8),

    /// The stored frequency table has no end-of-stream entry.
    #[error("frequency table has no end-of-stream entry")]
    MissingSentinel,

    /// The payload ended before the end-of-stream codeword was read.
    #[error("payload ended before the end-of-stream marker")]
    TruncatedPayload,

    /// A tree was requested for a table with no symbols.
    #[error("cannot build a tree from an empty frequency table")]
    EmptyTable,

    /// A symbol to be packed has no codeword in the code table.
    #[error("symbol {0} has no codeword")]
    UnknownSymbol(u8),

    /// A symbol occurs too often for its count to fit in four bytes.
    #[error("count for symbol {0} exceeds u32::MAX")]
    CountOverflow(u8),

    /// An I/O error occurred while reading or writing container bytes.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error describes a structurally invalid container
    /// (as opposed to a foreign file, a refusal, or an I/O failure).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::TruncatedHeader
                | Error::TruncatedTable { .. }
                | Error::DuplicateSymbol(_)
                | Error::ZeroCount(_)
                | Error::MissingSentinel
                | Error::TruncatedPayload
                | Error::EmptyTable
        )
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
