//! Creature sprite table.
//!
//! Each entry points at a block of tiles in a switchable bank. The first
//! four bytes are shared by every release; Game Boy Color entries carry two
//! more bytes that look like palette data and are ignored.

use serde::Serialize;

use lastbible_core::util::bank_offset;
use lastbible_core::{Layout, RomError, RomImage, Table, TileEncoding};

use crate::table::{RawRecord, read_table};

/// Bytes per 8x8 tile at two bits per pixel.
pub const TILE_BYTES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sprite {
    /// Width in tiles
    pub tiles_width: u8,
    /// Height in tiles
    pub tiles_height: u8,
    pub bank: u8,
    /// Bank window address the tiles are read from
    pub address: u16,
    /// Absolute offset of the first tile in the image
    pub rom_offset: u64,
    pub encoding: TileEncoding,
}

impl Sprite {
    /// Number of tile bytes the sprite covers.
    pub fn byte_len(&self) -> usize {
        TILE_BYTES * usize::from(self.tiles_width) * usize::from(self.tiles_height)
    }

    /// Size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            8 * u32::from(self.tiles_width),
            8 * u32::from(self.tiles_height),
        )
    }
}

pub fn decode_sprite(record: RawRecord<'_>, encoding: TileEncoding) -> Sprite {
    let (tiles_width, tiles_height) = record.nibbles_at(0);
    let bank = record.u8_at(1);
    let address = record.u16_le_at(2);
    Sprite {
        tiles_width,
        tiles_height,
        bank,
        address,
        rom_offset: bank_offset(bank, address),
        encoding,
    }
}

pub fn gather_creature_sprites(
    rom: &mut RomImage,
    layout: &Layout,
) -> Result<Option<Vec<Sprite>>, RomError> {
    let Some(geometry) = layout.geometry(Table::CreatureSprites) else {
        return Ok(None);
    };
    let encoding = layout.sprite_encoding();
    let table = read_table(rom, geometry)?;
    Ok(Some(
        table
            .records()
            .map(|record| decode_sprite(record, encoding))
            .collect(),
    ))
}
