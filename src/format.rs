//! Constants shared by the encoder and decoder.
//!
//! ```text
//! offset  size   field
//! 0       4      magic (312341, little-endian)
//! 4       4      N, number of frequency entries
//! 8       5*N    entries: 1 byte symbol + 4 byte count
//! 8+5N    ...    payload, MSB-first, zero padded
//! ```

/// Identifies a container produced by this crate.
pub const MAGIC: u32 = 312_341;

/// Byte value reserved as the end-of-stream marker.
///
/// Always present in the frequency table. Decoding stops at the first
/// occurrence, so inputs that contain this byte as data do not round-trip.
pub const SENTINEL: u8 = 13;

/// Magic plus symbol count.
pub const HEADER_LEN: usize = 8;

/// One symbol byte plus a four byte count.
pub const ENTRY_LEN: usize = 5;
