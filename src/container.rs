//! The on-disk container: header, frequency table, packed payload.
//!
//! A container carries the frequency table rather than the tree. The decoder
//! rebuilds the identical tree from it, since tree construction is
//! deterministic, and from the tree the identical code table.

use std::io::Write;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::bits;
use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::format::{ENTRY_LEN, HEADER_LEN, MAGIC};
use crate::frequency::FrequencyTable;
use crate::guard;
use crate::tree::HuffmanTree;

/// Knobs for [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Refuse to produce a container that is not strictly smaller than the
    /// input. On by default.
    pub require_shrink: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            require_shrink: true,
        }
    }
}

/// Compress `input` into a container, refusing if it would not shrink.
///
/// # Errors
/// Returns `Error::WouldNotShrink` if the container would be at least as
/// long as `input`.
pub fn encode(input: &[u8]) -> Result<Vec<u8>> {
    encode_with(input, &EncodeOptions::default())
}

/// Compress `input` into a container.
///
/// # Errors
/// Returns `Error::WouldNotShrink` when `options.require_shrink` is set and
/// the container would not be smaller, or `Error::CountOverflow` when a byte
/// occurs more than `u32::MAX` times.
pub fn encode_with(input: &[u8], options: &EncodeOptions) -> Result<Vec<u8>> {
    let table = FrequencyTable::from_bytes(input)?;
    let tree = HuffmanTree::build(&table)?;
    let code = CodeTable::derive(&tree);

    let estimated = guard::estimate(&table, &code);
    log::debug!(
        "input {} bytes, {} symbols, tree depth {}, container {} bytes",
        input.len(),
        table.len(),
        tree.depth(),
        estimated
    );
    if options.require_shrink {
        guard::check(input.len(), estimated)?;
    }

    let mut out = Vec::with_capacity(estimated);
    write_header(&mut out, &table)?;
    out.extend_from_slice(&bits::pack(input, &code)?);
    debug_assert_eq!(out.len(), estimated);
    Ok(out)
}

/// Decompress a container produced by [`encode`].
///
/// # Errors
/// Returns `Error::NotEncoded` if `container` does not start with the magic
/// value, and a structural error (see [`Error::is_malformed`]) if the header,
/// table, or payload is damaged.
pub fn decode(container: &[u8]) -> Result<Vec<u8>> {
    let header = inspect(container)?;
    let tree = HuffmanTree::build(&header.table)?;
    let code = CodeTable::derive(&tree);
    bits::unpack(&container[header.payload_offset..], &code)
}

/// Parsed header and frequency table of a container.
#[derive(Debug, Clone)]
pub struct Header {
    /// Frequency table the payload was coded with.
    pub table: FrequencyTable,
    /// Offset of the first payload byte.
    pub payload_offset: usize,
}

impl Header {
    /// Number of frequency entries.
    pub fn symbol_count(&self) -> usize {
        self.table.len()
    }
}

/// Parse and validate the header and frequency table without decoding.
///
/// # Errors
/// Same header and table errors as [`decode`].
pub fn inspect(container: &[u8]) -> Result<Header> {
    let mut reader = container;

    let magic = reader
        .read_u32::<LittleEndian>()
        .map_err(|_| Error::NotEncoded { found: None })?;
    if magic != MAGIC {
        return Err(Error::NotEncoded { found: Some(magic) });
    }

    let declared = reader
        .read_u32::<LittleEndian>()
        .map_err(|_| Error::TruncatedHeader)?;
    let available = reader.len() / ENTRY_LEN;
    if declared as usize > available {
        return Err(Error::TruncatedTable {
            declared,
            available,
        });
    }

    let mut entries = Vec::with_capacity(declared as usize);
    for _ in 0..declared {
        let symbol = reader.read_u8()?;
        let count = reader.read_u32::<LittleEndian>()?;
        entries.push((symbol, count));
    }
    let table = FrequencyTable::from_entries(entries)?;

    Ok(Header {
        table,
        payload_offset: HEADER_LEN + declared as usize * ENTRY_LEN,
    })
}

fn write_header<W: Write>(writer: &mut W, table: &FrequencyTable) -> Result<()> {
    writer.write_u32::<LittleEndian>(MAGIC)?;
    writer.write_u32::<LittleEndian>(table.len() as u32)?;
    for (symbol, count) in table.iter() {
        writer.write_u8(symbol)?;
        writer.write_u32::<LittleEndian>(count)?;
    }
    Ok(())
}
