use super::*;
use lastbible_core::Revision;
use std::io::Cursor;

#[test]
fn blank_tile_is_colour_zero() {
    let pixels = decode_tile(&[0u8; 16], TileEncoding::Plain);
    assert!(pixels.iter().flatten().all(|&p| p == 0));
}

#[test]
fn low_plane_msb_is_leftmost_pixel() {
    let mut tile = [0u8; 16];
    tile[0] = 0x80;
    let pixels = decode_tile(&tile, TileEncoding::Plain);
    assert_eq!(pixels[0][0], 1);
    assert!(pixels[0][1..].iter().all(|&p| p == 0));
    assert!(pixels[1..].iter().flatten().all(|&p| p == 0));
}

#[test]
fn high_plane_sets_bit_one() {
    let mut tile = [0u8; 16];
    // row 2: rightmost pixel has both bits, the one left of it only bit 1
    tile[4] = 0x01;
    tile[5] = 0x03;
    let pixels = decode_tile(&tile, TileEncoding::Plain);
    assert_eq!(pixels[2][7], 3);
    assert_eq!(pixels[2][6], 2);
    assert_eq!(pixels[2][5], 0);
}

#[test]
fn inverted_planes_are_complemented() {
    let pixels = decode_tile(&[0xFF; 16], TileEncoding::Inverted);
    assert!(pixels.iter().flatten().all(|&p| p == 0));

    let pixels = decode_tile(&[0u8; 16], TileEncoding::Inverted);
    assert!(pixels.iter().flatten().all(|&p| p == 3));
}

#[test]
fn render_places_tiles_row_major() {
    // 2x1 tiles: first blank, second solid colour 3
    let mut bytes = vec![0u8; 32];
    bytes[16..].fill(0xFF);
    let img = render_tiles(&bytes, 2, 1, TileEncoding::Plain);

    assert_eq!(img.dimensions(), (16, 8));
    assert_eq!(*img.get_pixel(0, 0), Rgba([224, 248, 208, 255]));
    assert_eq!(*img.get_pixel(7, 7), Rgba([224, 248, 208, 255]));
    assert_eq!(*img.get_pixel(8, 0), Rgba([8, 24, 32, 255]));
    assert_eq!(*img.get_pixel(15, 7), Rgba([8, 24, 32, 255]));
}

#[test]
fn render_second_row_of_tiles() {
    // 1x2 tiles: second tile has colour 1 in its top-left pixel
    let mut bytes = vec![0u8; 32];
    bytes[16] = 0x80;
    let img = render_tiles(&bytes, 1, 2, TileEncoding::Plain);
    assert_eq!(img.dimensions(), (8, 16));
    assert_eq!(*img.get_pixel(0, 8), Rgba([136, 192, 112, 255]));
    assert_eq!(*img.get_pixel(0, 0), Rgba([224, 248, 208, 255]));
}

#[test]
fn short_input_leaves_remaining_tiles_blank() {
    let img = render_tiles(&[0xFF; 16], 2, 1, TileEncoding::Plain);
    assert_eq!(*img.get_pixel(0, 0), shade(3));
    assert_eq!(*img.get_pixel(8, 0), shade(0));
}

#[test]
fn render_sprite_reads_from_bank() {
    let mut data = vec![0u8; 0xC000];
    data[0x134..0x144].copy_from_slice(Revision::GbcEn.fingerprint());
    // bank 2, address 0x4010 -> offset 0x8010
    data[0x8010..0x8020].fill(0xFF);
    let mut rom = RomImage::from_reader(Cursor::new(data)).unwrap();
    let sprite = Sprite {
        tiles_width: 1,
        tiles_height: 1,
        bank: 2,
        address: 0x4010,
        rom_offset: 0x8010,
        encoding: TileEncoding::Plain,
    };
    let img = render_sprite(&mut rom, &sprite).unwrap();
    assert_eq!(img.dimensions(), (8, 8));
    assert!(img.pixels().all(|p| *p == shade(3)));
}

#[test]
fn render_sprite_past_end_fails() {
    let mut data = vec![0u8; 0x8000];
    data[0x134..0x144].copy_from_slice(Revision::GbcEn.fingerprint());
    let mut rom = RomImage::from_reader(Cursor::new(data)).unwrap();
    let sprite = Sprite {
        tiles_width: 2,
        tiles_height: 2,
        bank: 1,
        address: 0x7FF0,
        rom_offset: 0x7FF0,
        encoding: TileEncoding::Plain,
    };
    assert!(matches!(
        render_sprite(&mut rom, &sprite),
        Err(RomError::OutOfBounds { .. })
    ));
}
