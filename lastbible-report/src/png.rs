//! PNG encoding for rendered sprites and maps.

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, RgbaImage};

use crate::ReportError;

/// Encode `img` as a PNG file in memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ReportError> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// `data:` URI embedding `img` as a base64 PNG, for use in an `<img>` tag.
pub fn data_uri(img: &RgbaImage) -> Result<String, ReportError> {
    let png = encode_png(img)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Write `img` to `path` as PNG regardless of the path's extension.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), ReportError> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn encodes_png_signature() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([8, 24, 32, 255]));
        let png = encode_png(&img).unwrap();
        assert!(png.starts_with(PNG_MAGIC));

        let decoded = image::load_from_memory(&png).unwrap().into_rgba8();
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(*decoded.get_pixel(3, 3), Rgba([8, 24, 32, 255]));
    }

    #[test]
    fn data_uri_is_base64_png() {
        let img = RgbaImage::new(1, 1);
        let uri = data_uri(&img).unwrap();
        let payload = uri.strip_prefix("data:image/png;base64,").unwrap();
        let bytes = STANDARD.decode(payload).unwrap();
        assert!(bytes.starts_with(PNG_MAGIC));
    }

    #[test]
    fn saves_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.png");
        save_png(&RgbaImage::new(16, 8), &path).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (16, 8));
    }
}
