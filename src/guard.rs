//! Pre-write size check.
//!
//! The container length is known exactly once the code table exists, so
//! compression can be refused before a single byte is produced.

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::format::{ENTRY_LEN, HEADER_LEN, SENTINEL};
use crate::frequency::FrequencyTable;

/// Number of payload bits for the input `table` was counted from, including
/// the terminating end-of-stream codeword but not padding.
///
/// `table` must come from [`FrequencyTable::from_bytes`]: when the sentinel
/// also occurs as data its terminating emission is on top of its count.
pub fn payload_bits(table: &FrequencyTable, code: &CodeTable) -> u64 {
    let data_bits: u64 = table
        .iter()
        .map(|(symbol, count)| {
            let len = code.codeword(symbol).map_or(0, |c| c.len());
            u64::from(count) * u64::from(len)
        })
        .sum();

    if table.has_synthetic_sentinel() {
        data_bits
    } else {
        let terminator = code.codeword(SENTINEL).map_or(0, |c| c.len());
        data_bits + u64::from(terminator)
    }
}

/// Exact container length: header, one entry per symbol, padded payload.
pub fn estimate(table: &FrequencyTable, code: &CodeTable) -> usize {
    let payload = payload_bits(table, code).div_ceil(8) as usize;
    HEADER_LEN + table.len() * ENTRY_LEN + payload
}

/// Refuse compression unless the container is strictly smaller.
///
/// # Errors
/// Returns `Error::WouldNotShrink` when `estimated >= original`.
pub fn check(original: usize, estimated: usize) -> Result<()> {
    if estimated < original {
        Ok(())
    } else {
        Err(Error::WouldNotShrink {
            original,
            estimated,
        })
    }
}
