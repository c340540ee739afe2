//! Random-access reader over a cartridge image.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::error::RomError;
use crate::layout::Layout;
use crate::revision::{FINGERPRINT_LEN, FINGERPRINT_OFFSET, Revision};
use crate::util::read_ascii;

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// An open cartridge image with its identified revision.
///
/// The underlying handle is owned by this value and closed when it is
/// dropped, on success and error paths alike.
pub struct RomImage {
    reader: Box<dyn ReadSeek>,
    size: u64,
    revision: Revision,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for RomImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RomImage")
            .field("size", &self.size)
            .field("revision", &self.revision)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl RomImage {
    /// Open the image at `path` and identify its revision.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RomError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut rom = Self::from_reader(BufReader::new(file))?;
        rom.path = Some(path.to_path_buf());
        Ok(rom)
    }

    /// Wrap an already-open reader and identify its revision.
    pub fn from_reader(reader: impl ReadSeek + 'static) -> Result<Self, RomError> {
        let mut reader: Box<dyn ReadSeek> = Box::new(reader);
        let size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut rom = Self {
            reader,
            size,
            // Placeholder until the header has been read.
            revision: Revision::GbJp,
            path: None,
        };
        rom.revision = rom.identify()?;
        log::debug!(
            "identified {} ({} bytes)",
            rom.revision.short_name(),
            rom.size
        );
        Ok(rom)
    }

    /// Read `len` bytes starting at `offset`.
    ///
    /// A range that extends past the end of the image, or a short read,
    /// fails with [`RomError::OutOfBounds`].
    pub fn read(&mut self, offset: u64, len: usize) -> Result<Vec<u8>, RomError> {
        let end = offset.checked_add(len as u64);
        if end.is_none_or(|end| end > self.size) {
            return Err(RomError::out_of_bounds(offset, len, self.size));
        }

        self.reader.seek(SeekFrom::Start(offset))?;
        let mut buf = vec![0u8; len];
        self.reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                RomError::out_of_bounds(offset, len, self.size)
            } else {
                RomError::Io(e)
            }
        })?;
        Ok(buf)
    }

    /// Read the cartridge title field and match it against every known
    /// release fingerprint.
    pub fn identify(&mut self) -> Result<Revision, RomError> {
        let title = self.read(FINGERPRINT_OFFSET, FINGERPRINT_LEN)?;
        Revision::from_fingerprint(&title).ok_or_else(|| RomError::unknown_revision(read_ascii(&title)))
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Built-in table geometry for this image's revision.
    pub fn layout(&self) -> Layout {
        Layout::for_revision(self.revision)
    }

    /// Size of the image in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path the image was opened from, if it came from the filesystem.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn make_rom(revision: Revision, size: usize) -> Vec<u8> {
        let mut rom = vec![0u8; size];
        let start = FINGERPRINT_OFFSET as usize;
        rom[start..start + FINGERPRINT_LEN].copy_from_slice(revision.fingerprint());
        rom
    }

    #[test]
    fn identifies_each_revision() {
        for &revision in Revision::all() {
            let rom = RomImage::from_reader(Cursor::new(make_rom(revision, 0x8000))).unwrap();
            assert_eq!(rom.revision(), revision);
            assert_eq!(rom.size(), 0x8000);
        }
    }

    #[test]
    fn unknown_title_is_rejected() {
        let mut data = vec![0u8; 0x8000];
        data[0x134..0x13C].copy_from_slice(b"TESTGAME");
        match RomImage::from_reader(Cursor::new(data)) {
            Err(RomError::UnknownRevision { title }) => assert_eq!(title, "TESTGAME"),
            other => panic!("expected UnknownRevision, got {:?}", other),
        }
    }

    #[test]
    fn image_too_small_for_header_is_out_of_bounds() {
        let result = RomImage::from_reader(Cursor::new(vec![0u8; 0x100]));
        assert!(matches!(result, Err(RomError::OutOfBounds { .. })));
    }

    #[test]
    fn read_returns_requested_bytes() {
        let mut data = make_rom(Revision::GbcEn, 0x8000);
        data[0x4000..0x4004].copy_from_slice(&[1, 2, 3, 4]);
        let mut rom = RomImage::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(rom.read(0x4000, 4).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(rom.read(0x7FFF, 1).unwrap(), vec![0]);
        assert!(rom.read(0x8000, 0).unwrap().is_empty());
    }

    #[test]
    fn read_past_end_is_fatal() {
        let mut rom =
            RomImage::from_reader(Cursor::new(make_rom(Revision::GbcEn, 0x8000))).unwrap();
        match rom.read(0x7FFF, 2) {
            Err(RomError::OutOfBounds { offset, len, size }) => {
                assert_eq!((offset, len, size), (0x7FFF, 2, 0x8000));
            }
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
        assert!(matches!(
            rom.read(u64::MAX, 2),
            Err(RomError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn layout_follows_revision() {
        let rom = RomImage::from_reader(Cursor::new(make_rom(Revision::GbJp, 0x8000))).unwrap();
        assert_eq!(rom.layout().revision, Revision::GbJp);
    }
}
