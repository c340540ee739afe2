//! Shared types for reading Last Bible cartridge images: the image source,
//! the catalogue of known releases, their table geometry, and the error
//! type every decoding stage reports through.

pub mod error;
pub mod layout;
pub mod revision;
pub mod rom;
pub mod util;

pub use error::RomError;
pub use layout::{
    Layout, StringPageGeometry, Table, TableGeometry, TileEncoding, WorldMapGeometry,
};
pub use revision::{Language, Revision, RevisionParseError};
pub use rom::{ReadSeek, RomImage};
