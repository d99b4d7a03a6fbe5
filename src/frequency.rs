//! Byte frequency counting.
//!
//! The table is indexed by byte value, so iteration is always in ascending
//! symbol order. That order is the tie-break for tree construction and the
//! order entries are written to a container.

use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};
use crate::format::SENTINEL;

/// Occurrence counts for every symbol present in an input, plus the sentinel.
///
/// Invariant: every stored count is non-zero, and the sentinel is present.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; 256],
    synthetic_sentinel: bool,
}

impl FrequencyTable {
    /// Count every byte of `input` and add the end-of-stream sentinel.
    ///
    /// The sentinel entry is inserted with count 1 only when the input does
    /// not already contain that byte; otherwise its natural count stands.
    ///
    /// # Errors
    /// Returns `Error::CountOverflow` if any byte occurs more than `u32::MAX` times.
    pub fn from_bytes(input: &[u8]) -> Result<Self> {
        let mut counts = [0u32; 256];
        for &byte in input {
            let slot = &mut counts[byte as usize];
            *slot = slot.checked_add(1).ok_or(Error::CountOverflow(byte))?;
        }

        let synthetic_sentinel = counts[SENTINEL as usize] == 0;
        if synthetic_sentinel {
            counts[SENTINEL as usize] = 1;
        } else {
            log::warn!(
                "input contains the end-of-stream byte {} as data; decoding will stop at its first occurrence",
                SENTINEL
            );
        }

        let table = Self {
            counts,
            synthetic_sentinel,
        };
        log::trace!("frequency table: {:?}", table);
        Ok(table)
    }

    /// Rebuild a table from stored `(symbol, count)` entries.
    ///
    /// # Errors
    /// Rejects zero counts, repeated symbols, and tables without the sentinel.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, u32)>,
    {
        let mut counts = [0u32; 256];
        for (symbol, count) in entries {
            if count == 0 {
                return Err(Error::ZeroCount(symbol));
            }
            if counts[symbol as usize] != 0 {
                return Err(Error::DuplicateSymbol(symbol));
            }
            counts[symbol as usize] = count;
        }
        if counts[SENTINEL as usize] == 0 {
            return Err(Error::MissingSentinel);
        }

        Ok(Self {
            counts,
            // A stored table no longer knows how the sentinel got there.
            synthetic_sentinel: false,
        })
    }

    /// Count for `symbol`, or 0 when absent.
    pub fn count(&self, symbol: u8) -> u32 {
        self.counts[symbol as usize]
    }

    /// Whether the sentinel entry was added rather than counted from input.
    pub fn has_synthetic_sentinel(&self) -> bool {
        self.synthetic_sentinel
    }

    /// Present `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as u8, count))
    }

    /// Number of distinct symbols, sentinel included.
    pub fn len(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Always false: the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| u64::from(count)).sum()
    }
}

impl Index<u8> for FrequencyTable {
    type Output = u32;

    fn index(&self, symbol: u8) -> &u32 {
        &self.counts[symbol as usize]
    }
}

// Print only present symbols; the full 256 slots are noise.
impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_bytes_and_adds_sentinel() {
        let table = FrequencyTable::from_bytes(b"abracadabra").unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![(SENTINEL, 1), (b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
        );
        assert!(table.has_synthetic_sentinel());
        assert_eq!(table.total(), 12);
    }

    #[test]
    fn empty_input_holds_only_sentinel() {
        let table = FrequencyTable::from_bytes(&[]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table[SENTINEL], 1);
    }

    #[test]
    fn natural_sentinel_keeps_its_count() {
        let table = FrequencyTable::from_bytes(&[SENTINEL, b'x', SENTINEL]).unwrap();
        assert_eq!(table[SENTINEL], 2);
        assert!(!table.has_synthetic_sentinel());
    }

    #[test]
    fn stored_entries_are_validated() {
        assert!(matches!(
            FrequencyTable::from_entries([(SENTINEL, 1), (b'a', 0)]),
            Err(Error::ZeroCount(b'a'))
        ));
        assert!(matches!(
            FrequencyTable::from_entries([(SENTINEL, 1), (b'a', 3), (b'a', 3)]),
            Err(Error::DuplicateSymbol(b'a'))
        ));
        assert!(matches!(
            FrequencyTable::from_entries([(b'a', 3)]),
            Err(Error::MissingSentinel)
        ));
    }

    #[test]
    fn entries_rebuild_the_same_counts() {
        let table = FrequencyTable::from_bytes(b"hello world").unwrap();
        let rebuilt = FrequencyTable::from_entries(table.iter()).unwrap();
        assert!(table.iter().eq(rebuilt.iter()));
    }
}
