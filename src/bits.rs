//! Bit packing of codeword streams.
//!
//! Bits are written most-significant first within each byte, in the order
//! they were appended. The stream is zero padded to a byte boundary once the
//! end-of-stream codeword has been written; the unpacker stops as soon as it
//! decodes that codeword, so padding bits are never interpreted.

use bitvec::prelude::*;

use crate::code::{CodeTable, Codeword};
use crate::error::{Error, Result};
use crate::format::SENTINEL;

/// Accumulates codewords into an MSB-first bit stream.
#[derive(Debug, Default)]
pub struct BitPacker {
    bits: BitVec<u8, Msb0>,
}

impl BitPacker {
    /// Create an empty packer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every bit of `code`.
    pub fn push(&mut self, code: Codeword) {
        self.bits.extend(code.iter());
    }

    /// Append the codeword for `symbol`.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` if `table` has no codeword for it.
    pub fn push_symbol(&mut self, table: &CodeTable, symbol: u8) -> Result<()> {
        let code = table
            .codeword(symbol)
            .ok_or(Error::UnknownSymbol(symbol))?;
        self.push(code);
        Ok(())
    }

    /// Bits written so far, excluding padding.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pad with zero bits to a whole byte and return the bytes.
    pub fn finish(mut self) -> Vec<u8> {
        while self.bits.len() % 8 != 0 {
            self.bits.push(false);
        }
        self.bits.into_vec()
    }
}

/// Pack `input` followed by the end-of-stream codeword.
///
/// # Errors
/// Returns `Error::UnknownSymbol` if a byte of `input` (or the sentinel)
/// has no codeword in `table`.
pub fn pack(input: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut packer = BitPacker::new();
    for &byte in input {
        packer.push_symbol(table, byte)?;
    }
    packer.push_symbol(table, SENTINEL)?;
    log::debug!(
        "packed {} symbols into {} bits",
        input.len() + 1,
        packer.bit_len()
    );
    Ok(packer.finish())
}

/// Decodes symbols from a packed stream by incremental prefix matching.
pub struct BitUnpacker<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
    table: &'a CodeTable,
}

impl<'a> BitUnpacker<'a> {
    /// Read codewords from `payload` using the inverse mapping in `table`.
    pub fn new(payload: &'a [u8], table: &'a CodeTable) -> Self {
        Self {
            bits: payload.view_bits::<Msb0>(),
            pos: 0,
            table,
        }
    }

    /// Bits consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode the next symbol.
    ///
    /// Bits are appended to a candidate one at a time; the first candidate
    /// that matches a codeword is the symbol, since codewords are prefix-free.
    ///
    /// # Errors
    /// Returns `Error::TruncatedPayload` if the stream runs out mid-codeword,
    /// or if the candidate grows past the longest codeword.
    pub fn next_symbol(&mut self) -> Result<u8> {
        let mut candidate = Codeword::EMPTY;
        while let Some(bit) = self.bits.get(self.pos).map(|bit| *bit) {
            self.pos += 1;
            candidate = candidate.push(bit);
            if let Some(symbol) = self.table.symbol(&candidate) {
                return Ok(symbol);
            }
            if candidate.len() >= self.table.max_len() {
                break;
            }
        }
        Err(Error::TruncatedPayload)
    }
}

/// Decode `payload` until the end-of-stream symbol, returning everything
/// before it. Bits after the end-of-stream codeword are ignored.
///
/// # Errors
/// Returns `Error::TruncatedPayload` if the payload ends first.
pub fn unpack(payload: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut unpacker = BitUnpacker::new(payload, table);
    let mut out = Vec::new();
    loop {
        let symbol = unpacker.next_symbol()?;
        if symbol == SENTINEL {
            log::debug!(
                "unpacked {} symbols from {} bits",
                out.len(),
                unpacker.position()
            );
            return Ok(out);
        }
        out.push(symbol);
    }
}
