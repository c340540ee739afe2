//! Overworld map renderer.
//!
//! The map is stored in three levels. Each map byte names a block16, a
//! 2x2 group of block4s; each block4 is a 2x2 group of tile ids as they
//! would be numbered in VRAM. Quadrants are ordered top-left, top-right,
//! bottom-left, bottom-right.

use image::RgbaImage;

use lastbible_core::{Layout, RomError, RomImage, WorldMapGeometry};

use crate::sprites::TILE_BYTES;
use crate::tiles::{TilePixels, decode_tile, draw_tile, shade};

/// Number of tiles in the overworld tileset.
pub const TILESET_TILES: usize = 128;
/// Block tables are indexed by a byte.
const BLOCK_ENTRIES: usize = 256;

/// Pixel size of a block4 and of a block16.
const BLOCK4_PX: u32 = 16;
const BLOCK16_PX: u32 = 32;

/// Top-left pixel offsets of the four quadrants of a block `size` wide.
fn quadrants(size: u32) -> [(u32, u32); 4] {
    let half = size / 2;
    [(0, 0), (half, 0), (0, half), (half, half)]
}

struct MapTiles {
    tiles: Vec<TilePixels>,
    base_tile: u8,
    block4s: Vec<u8>,
    block16s: Vec<u8>,
}

impl MapTiles {
    fn read(rom: &mut RomImage, geometry: &WorldMapGeometry) -> Result<Self, RomError> {
        let tileset = rom.read(geometry.tileset_offset, TILESET_TILES * TILE_BYTES)?;
        let tiles = tileset
            .chunks_exact(TILE_BYTES)
            .map(|tile| decode_tile(tile, geometry.encoding))
            .collect();
        Ok(Self {
            tiles,
            base_tile: geometry.base_tile,
            block4s: rom.read(geometry.block4_offset, 4 * BLOCK_ENTRIES)?,
            block16s: rom.read(geometry.block16_offset, 4 * BLOCK_ENTRIES)?,
        })
    }

    fn draw_block4(&self, img: &mut RgbaImage, id: u8, x: u32, y: u32) {
        let base = 4 * usize::from(id);
        for (&tile_id, (dx, dy)) in self.block4s[base..base + 4].iter().zip(quadrants(BLOCK4_PX)) {
            let index = usize::from(tile_id.wrapping_sub(self.base_tile));
            match self.tiles.get(index) {
                Some(tile) => draw_tile(img, tile, x + dx, y + dy),
                None => log::debug!("block4 {:#04x} uses tile {:#04x} outside the tileset", id, tile_id),
            }
        }
    }

    fn draw_block16(&self, img: &mut RgbaImage, id: u8, x: u32, y: u32) {
        let base = 4 * usize::from(id);
        for (&block, (dx, dy)) in self.block16s[base..base + 4].iter().zip(quadrants(BLOCK16_PX)) {
            self.draw_block4(img, block, x + dx, y + dy);
        }
    }
}

/// Render the whole overworld, one block16 per map byte.
///
/// Fails with [`RomError::TableUnavailable`] when the layout has no
/// world map.
pub fn render_world_map(rom: &mut RomImage, layout: &Layout) -> Result<RgbaImage, RomError> {
    let geometry = layout.world_map()?;
    log::debug!(
        "rendering {}x{} block world map from {:#x}",
        geometry.width,
        geometry.height,
        geometry.map_offset
    );
    let tiles = MapTiles::read(rom, &geometry)?;
    let map = rom.read(geometry.map_offset, geometry.width * geometry.height)?;

    let (width, height) = (geometry.width as u32, geometry.height as u32);
    let mut img = RgbaImage::from_pixel(BLOCK16_PX * width, BLOCK16_PX * height, shade(0));

    let mut ids = map.iter().copied();
    for by in 0..height {
        for bx in 0..width {
            if let Some(id) = ids.next() {
                tiles.draw_block16(&mut img, id, BLOCK16_PX * bx, BLOCK16_PX * by);
            }
        }
    }
    Ok(img)
}

#[cfg(test)]
#[path = "tests/worldmap_tests.rs"]
mod tests;
