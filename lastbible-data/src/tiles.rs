//! 2bpp planar tile decoding and rendering.
//!
//! A tile is 8x8 pixels stored as 16 bytes: for each row, one byte holding
//! bit 0 of every pixel followed by one byte holding bit 1. The leftmost
//! pixel is the most significant bit.

use image::{Rgba, RgbaImage};

use lastbible_core::{RomError, RomImage, TileEncoding};

use crate::sprites::{Sprite, TILE_BYTES};

/// Four-shade green palette, lightest first.
pub const PALETTE: [[u8; 3]; 4] = [[224, 248, 208], [136, 192, 112], [52, 104, 86], [8, 24, 32]];

/// Palette indices of one tile, indexed `[row][column]`.
pub type TilePixels = [[u8; 8]; 8];

/// Decode one tile. `tile` must hold at least [`TILE_BYTES`] bytes.
pub fn decode_tile(tile: &[u8], encoding: TileEncoding) -> TilePixels {
    let mut pixels = [[0u8; 8]; 8];
    for (row, planes) in pixels.iter_mut().zip(tile.chunks_exact(2)) {
        let (mut lo, mut hi) = (planes[0], planes[1]);
        if encoding == TileEncoding::Inverted {
            lo = !lo;
            hi = !hi;
        }
        for (x, pixel) in row.iter_mut().enumerate() {
            let mask = 0x80 >> x;
            *pixel = u8::from(lo & mask != 0) | (u8::from(hi & mask != 0) << 1);
        }
    }
    pixels
}

pub fn shade(index: u8) -> Rgba<u8> {
    let [r, g, b] = PALETTE[usize::from(index & 0x3)];
    Rgba([r, g, b, 255])
}

/// Blit a decoded tile with its top-left corner at (`x`, `y`).
pub fn draw_tile(img: &mut RgbaImage, pixels: &TilePixels, x: u32, y: u32) {
    for (dy, row) in (0u32..).zip(pixels.iter()) {
        for (dx, &index) in (0u32..).zip(row.iter()) {
            img.put_pixel(x + dx, y + dy, shade(index));
        }
    }
}

/// Render `width` x `height` tiles laid out row by row.
///
/// Missing trailing bytes leave the remaining tiles in the lightest shade.
pub fn render_tiles(bytes: &[u8], width: u32, height: u32, encoding: TileEncoding) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(8 * width, 8 * height, shade(0));
    let mut tiles = bytes.chunks_exact(TILE_BYTES);
    for ty in 0..height {
        for tx in 0..width {
            let Some(tile) = tiles.next() else {
                return img;
            };
            draw_tile(&mut img, &decode_tile(tile, encoding), 8 * tx, 8 * ty);
        }
    }
    img
}

/// Read a sprite's tiles from the image and render them.
pub fn render_sprite(rom: &mut RomImage, sprite: &Sprite) -> Result<RgbaImage, RomError> {
    let bytes = rom.read(sprite.rom_offset, sprite.byte_len())?;
    Ok(render_tiles(
        &bytes,
        u32::from(sprite.tiles_width),
        u32::from(sprite.tiles_height),
        sprite.encoding,
    ))
}

#[cfg(test)]
#[path = "tests/tiles_tests.rs"]
mod tests;
