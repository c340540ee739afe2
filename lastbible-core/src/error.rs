use thiserror::Error;

use crate::layout::Table;
use crate::revision::Revision;

/// Errors that can occur while reading and decoding a cartridge image.
#[derive(Debug, Error)]
pub enum RomError {
    /// I/O error while opening or reading the image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The header fingerprint matched no known release
    #[error("unknown Last Bible ROM (cart title was {title:?})")]
    UnknownRevision { title: String },

    /// A requested byte range lies (partly) outside the image
    #[error("couldn't read from ROM (pos={offset:#x}, len={len}, size={size:#x})")]
    OutOfBounds { offset: u64, len: usize, size: u64 },

    /// The table has no known geometry for this release
    #[error("{table} table is not available for {revision}")]
    TableUnavailable { table: Table, revision: Revision },

    /// The operation is deliberately refused for this release
    #[error("{operation} is not supported for {revision}")]
    UnsupportedRevision {
        revision: Revision,
        operation: &'static str,
    },
}

impl RomError {
    pub fn unknown_revision(title: impl Into<String>) -> Self {
        Self::UnknownRevision {
            title: title.into(),
        }
    }

    pub fn out_of_bounds(offset: u64, len: usize, size: u64) -> Self {
        Self::OutOfBounds { offset, len, size }
    }

    pub fn table_unavailable(table: Table, revision: Revision) -> Self {
        Self::TableUnavailable { table, revision }
    }

    pub fn unsupported(revision: Revision, operation: &'static str) -> Self {
        Self::UnsupportedRevision {
            revision,
            operation,
        }
    }
}
