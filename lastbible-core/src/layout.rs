//! Per-revision table geometry.
//!
//! Every data table sits at a fixed offset with a fixed record size and
//! count. The numbers are kept as data keyed by [`Revision`]; a missing
//! entry is the "not available" signal, so decoders never branch on the
//! revision themselves.

use serde::{Deserialize, Serialize};

use crate::error::RomError;
use crate::revision::Revision;

pub const NUM_CREATURES: usize = 109;
pub const NUM_ITEMS: usize = 105;
pub const NUM_EFFECTS: usize = 90;

pub const CREATURE_RECORD_SIZE: usize = 32;
pub const ITEM_RECORD_SIZE: usize = 23;
pub const EFFECT_RECORD_SIZE: usize = 14;

/// The logical tables that can be extracted from an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Creatures,
    CreatureSprites,
    Items,
    Effects,
    StringPages,
    WorldMap,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Creatures => "creature",
            Self::CreatureSprites => "creature sprite",
            Self::Items => "item",
            Self::Effects => "effect",
            Self::StringPages => "string page",
            Self::WorldMap => "world map",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Location and shape of a table of fixed-size records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGeometry {
    /// Absolute byte offset of the first record
    pub offset: u64,
    /// Size of one record in bytes
    pub record_size: usize,
    /// Number of records
    pub record_count: usize,
}

impl TableGeometry {
    pub const fn new(offset: u64, record_size: usize, record_count: usize) -> Self {
        Self {
            offset,
            record_size,
            record_count,
        }
    }

    /// Total number of bytes covered by the table.
    pub fn byte_len(&self) -> usize {
        self.record_size * self.record_count
    }
}

/// How tile bitplanes are stored in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileEncoding {
    /// Planes are stored exactly as the video hardware expects them.
    #[default]
    Plain,
    /// Planes are stored complemented and must be inverted before decoding.
    Inverted,
}

/// A bank of text: a pointer table plus the page its pointers refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringPageGeometry {
    pub name: String,
    /// Absolute offset of the page (start of its ROM bank)
    pub page_offset: u64,
    /// Page size in bytes
    pub page_size: usize,
    /// Absolute offset of the little-endian pointer table
    pub pointer_table_offset: u64,
    /// Number of pointers in the table
    pub pointer_count: usize,
}

/// The world map is a grid of block16 ids; each block16 is 2x2 block4s and
/// each block4 is 2x2 tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldMapGeometry {
    pub tileset_offset: u64,
    /// Tile id the tileset is loaded at in VRAM
    pub base_tile: u8,
    pub block4_offset: u64,
    pub block16_offset: u64,
    pub map_offset: u64,
    /// Map width in block16 units
    pub width: usize,
    /// Map height in block16 units
    pub height: usize,
    pub encoding: TileEncoding,
}

const GEOMETRY: &[(Revision, Table, TableGeometry)] = &[
    (
        Revision::GbJp,
        Table::Creatures,
        TableGeometry::new(0x14f0a, CREATURE_RECORD_SIZE, NUM_CREATURES),
    ),
    (
        Revision::GbJp,
        Table::CreatureSprites,
        TableGeometry::new(0x14d45, 4, NUM_CREATURES),
    ),
    (
        Revision::GbJp,
        Table::Effects,
        TableGeometry::new(0x40000, EFFECT_RECORD_SIZE, NUM_EFFECTS),
    ),
    (
        Revision::GbJp,
        Table::Items,
        TableGeometry::new(0x405c4, ITEM_RECORD_SIZE, NUM_ITEMS),
    ),
    (
        Revision::GbcJp,
        Table::Creatures,
        TableGeometry::new(0x166dc, CREATURE_RECORD_SIZE, NUM_CREATURES),
    ),
    (
        Revision::GbcJp,
        Table::Effects,
        TableGeometry::new(0x40000, EFFECT_RECORD_SIZE, NUM_EFFECTS),
    ),
    (
        Revision::GbcJp,
        Table::Items,
        TableGeometry::new(0x405c4, ITEM_RECORD_SIZE, NUM_ITEMS),
    ),
    (
        Revision::GbcEn,
        Table::Creatures,
        TableGeometry::new(0x166dc, CREATURE_RECORD_SIZE, NUM_CREATURES),
    ),
    (
        Revision::GbcEn,
        Table::CreatureSprites,
        TableGeometry::new(0x44000, 6, NUM_CREATURES),
    ),
    (
        Revision::GbcEn,
        Table::Effects,
        TableGeometry::new(0x40000, EFFECT_RECORD_SIZE, NUM_EFFECTS),
    ),
    (
        Revision::GbcEn,
        Table::Items,
        TableGeometry::new(0x405c4, ITEM_RECORD_SIZE, NUM_ITEMS),
    ),
];

const GB_JP_WORLD_MAP: WorldMapGeometry = WorldMapGeometry {
    tileset_offset: 0x2009b,
    base_tile: 0x90,
    block4_offset: 0x6e69,
    block16_offset: 0x1c112,
    map_offset: 0x18116,
    width: 224 / 4,
    height: 160 / 4,
    encoding: TileEncoding::Inverted,
};

/// The complete set of known geometry for one image.
#[derive(Debug, Clone)]
pub struct Layout {
    pub revision: Revision,
    tables: Vec<(Table, TableGeometry)>,
    sprite_encoding: TileEncoding,
    string_pages: Option<Vec<StringPageGeometry>>,
    world_map: Option<WorldMapGeometry>,
}

impl Layout {
    /// An empty layout: every table is unavailable.
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            tables: Vec::new(),
            sprite_encoding: TileEncoding::Plain,
            string_pages: None,
            world_map: None,
        }
    }

    /// The built-in geometry for a known release.
    pub fn for_revision(revision: Revision) -> Self {
        let tables = GEOMETRY
            .iter()
            .filter(|(rev, _, _)| *rev == revision)
            .map(|&(_, table, geometry)| (table, geometry))
            .collect();
        let (sprite_encoding, world_map) = match revision {
            Revision::GbJp => (TileEncoding::Inverted, Some(GB_JP_WORLD_MAP)),
            Revision::GbcJp | Revision::GbcEn => (TileEncoding::Plain, None),
        };
        Self {
            revision,
            tables,
            sprite_encoding,
            // No pointer tables have been located in any release yet.
            string_pages: None,
            world_map,
        }
    }

    pub fn with_table(mut self, table: Table, geometry: TableGeometry) -> Self {
        self.tables.retain(|(t, _)| *t != table);
        self.tables.push((table, geometry));
        self
    }

    pub fn with_sprite_encoding(mut self, encoding: TileEncoding) -> Self {
        self.sprite_encoding = encoding;
        self
    }

    pub fn with_string_pages(mut self, pages: Vec<StringPageGeometry>) -> Self {
        self.string_pages = Some(pages);
        self
    }

    pub fn with_world_map(mut self, geometry: WorldMapGeometry) -> Self {
        self.world_map = Some(geometry);
        self
    }

    /// Geometry for `table`, or `None` when it is not available.
    pub fn geometry(&self, table: Table) -> Option<TableGeometry> {
        self.tables
            .iter()
            .find(|(t, _)| *t == table)
            .map(|&(_, geometry)| geometry)
    }

    /// Like [`geometry`](Self::geometry), for callers that cannot proceed
    /// without the table.
    pub fn require(&self, table: Table) -> Result<TableGeometry, RomError> {
        self.geometry(table)
            .ok_or_else(|| RomError::table_unavailable(table, self.revision))
    }

    pub fn sprite_encoding(&self) -> TileEncoding {
        self.sprite_encoding
    }

    pub fn string_pages(&self) -> Option<&[StringPageGeometry]> {
        self.string_pages.as_deref()
    }

    pub fn world_map(&self) -> Result<WorldMapGeometry, RomError> {
        self.world_map
            .ok_or_else(|| RomError::table_unavailable(Table::WorldMap, self.revision))
    }

    /// Whether `table` has known geometry.
    pub fn has(&self, table: Table) -> bool {
        match table {
            Table::StringPages => self.string_pages.is_some(),
            Table::WorldMap => self.world_map.is_some(),
            _ => self.geometry(table).is_some(),
        }
    }
}
