//! Fixed-size record tables.

use std::ops::Range;

use lastbible_core::util::{nibbles, u16_le};
use lastbible_core::{RomError, RomImage, TableGeometry};

/// Terminator for variable-length fields and strings.
pub const SENTINEL: u8 = 0xFF;

/// A table read in one piece from the image.
#[derive(Debug, Clone)]
pub struct RawTable {
    geometry: TableGeometry,
    bytes: Vec<u8>,
}

/// Borrowed view of one record inside a [`RawTable`].
#[derive(Debug, Clone, Copy)]
pub struct RawRecord<'a> {
    index: usize,
    bytes: &'a [u8],
}

/// Read `geometry.record_count` records of `geometry.record_size` bytes
/// starting at `geometry.offset`.
///
/// The whole table must lie inside the image; otherwise the image's
/// out-of-bounds error is returned unchanged.
pub fn read_table(rom: &mut RomImage, geometry: TableGeometry) -> Result<RawTable, RomError> {
    debug_assert!(geometry.record_size > 0, "record size must be non-zero");
    log::debug!(
        "reading {} x {} byte records at {:#x}",
        geometry.record_count,
        geometry.record_size,
        geometry.offset
    );
    let bytes = rom.read(geometry.offset, geometry.byte_len())?;
    Ok(RawTable { geometry, bytes })
}

impl RawTable {
    pub fn geometry(&self) -> TableGeometry {
        self.geometry
    }

    pub fn len(&self) -> usize {
        self.geometry.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records in table order.
    pub fn records(&self) -> impl Iterator<Item = RawRecord<'_>> {
        self.bytes
            .chunks_exact(self.geometry.record_size)
            .enumerate()
            .map(|(index, bytes)| RawRecord { index, bytes })
    }
}

impl<'a> RawRecord<'a> {
    /// Zero-based position in the table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based record number as used in game documentation.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn slice(&self, range: Range<usize>) -> &'a [u8] {
        &self.bytes[range]
    }

    pub fn u8_at(&self, pos: usize) -> u8 {
        self.bytes[pos]
    }

    pub fn u16_le_at(&self, pos: usize) -> u16 {
        u16_le(self.bytes, pos)
    }

    /// `(low, high)` nibbles of the byte at `pos`.
    pub fn nibbles_at(&self, pos: usize) -> (u8, u8) {
        nibbles(self.bytes[pos])
    }

    /// Up to `max` bytes from `pos`, with trailing [`SENTINEL`]s removed.
    pub fn byte_list(&self, pos: usize, max: usize) -> Vec<u8> {
        trim_trailing_sentinels(&self.bytes[pos..pos + max]).to_vec()
    }
}

/// Strip the run of [`SENTINEL`] bytes at the end of `bytes`.
///
/// Only the trailing run is removed: `[3, 0xFF, 7, 0xFF]` becomes
/// `[3, 0xFF, 7]`. A sentinel followed by real entries is kept, which has
/// not been checked against real data.
pub fn trim_trailing_sentinels(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != SENTINEL)
        .map_or(0, |pos| pos + 1);
    &bytes[..end]
}
