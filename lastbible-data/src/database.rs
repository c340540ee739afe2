//! Every decoded table of one image.

use serde::Serialize;

use lastbible_core::{Layout, Revision, RomError, RomImage};

use crate::creatures::{Creature, gather_creatures};
use crate::effects::{Effect, gather_effects};
use crate::items::{Item, gather_items};
use crate::sprites::{Sprite, gather_creature_sprites};
use crate::strings::{StringPage, gather_string_pages};
use crate::text::TextDecoder;

/// Decoded tables. A `None` field means the table is not known for this
/// revision, which is different from a table with no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Database {
    pub revision: Revision,
    pub creatures: Option<Vec<Creature>>,
    pub creature_sprites: Option<Vec<Sprite>>,
    pub items: Option<Vec<Item>>,
    pub effects: Option<Vec<Effect>>,
    pub string_pages: Option<Vec<StringPage>>,
}

impl Database {
    /// Decode every table of `rom` using its built-in layout.
    ///
    /// Only releases whose tables have been verified can be dumped; the
    /// others fail with [`RomError::UnsupportedRevision`].
    pub fn gather(rom: &mut RomImage) -> Result<Self, RomError> {
        let revision = rom.revision();
        if !revision.supports_full_dump() {
            return Err(RomError::unsupported(revision, "full dump"));
        }
        let layout = rom.layout();
        Self::gather_with(rom, &layout)
    }

    /// Decode every table `layout` knows about, in a fixed order.
    pub fn gather_with(rom: &mut RomImage, layout: &Layout) -> Result<Self, RomError> {
        let decoder = TextDecoder::new(layout.revision.language());
        log::debug!("gathering tables for {}", layout.revision.short_name());

        let creatures = gather_creatures(rom, layout, &decoder)?;
        let creature_sprites = gather_creature_sprites(rom, layout)?;
        let items = gather_items(rom, layout, &decoder)?;
        let effects = gather_effects(rom, layout, &decoder)?;
        let string_pages = gather_string_pages(rom, layout, &decoder)?;

        Ok(Self {
            revision: layout.revision,
            creatures,
            creature_sprites,
            items,
            effects,
            string_pages,
        })
    }

    /// Sprite of a creature, if the sprite table is available.
    pub fn sprite_for(&self, creature: &Creature) -> Option<&Sprite> {
        self.creature_sprites.as_ref()?.get(creature.sprite)
    }

    /// Effect by id, if the effect table is available and long enough.
    pub fn effect(&self, id: u8) -> Option<&Effect> {
        self.effects.as_ref()?.get(usize::from(id))
    }
}

#[cfg(test)]
#[path = "tests/database_tests.rs"]
mod tests;
