//! Creature (monster) table.
//!
//! Record layout, 32 bytes:
//!
//! | offset | field |
//! |---|---|
//! | 0..7 | name |
//! | 7 | level |
//! | 8..10 | HP (LE) |
//! | 10 | MP |
//! | 11 | tribe |
//! | 12 | endurance (low nibble), intelligence (high nibble) |
//! | 13 | strength (low), speed (high) |
//! | 14 | luck (low) |
//! | 17 | ally spell count (low), enemy spell count (high) |
//! | 18..22 | spells, 0xFF padded |
//! | 22..24 | experience (LE) |

use serde::Serialize;

use lastbible_core::{Layout, RomError, RomImage, Table};

use crate::table::{RawRecord, read_table};
use crate::text::{Text, TextDecoder};

const NAME_LEN: usize = 7;
const MAX_SPELLS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Creature {
    pub num: usize,
    pub name: Text,
    pub level: u8,
    pub hp: u16,
    pub mp: u8,
    pub tribe: u8,
    pub endurance: u8,
    pub intelligence: u8,
    pub strength: u8,
    pub speed: u8,
    pub luck: u8,
    /// Number of leading spells usable when the creature fights on the
    /// player's side.
    pub ally_spell_count: u8,
    /// Number of leading spells usable when the creature is an enemy.
    pub enemy_spell_count: u8,
    /// Effect ids, in the order the game lists them.
    pub spells: Vec<u8>,
    pub experience: u16,
    /// Index of this creature's entry in the creature sprite table.
    pub sprite: usize,
}

/// Where a spell in a creature's list can be cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpellContext {
    Both,
    EnemyOnly,
    AllyOnly,
}

impl Creature {
    /// Context of the spell at position `pos` in [`Creature::spells`].
    pub fn spell_context(&self, pos: usize) -> SpellContext {
        if pos >= usize::from(self.ally_spell_count) {
            SpellContext::EnemyOnly
        } else if pos >= usize::from(self.enemy_spell_count) {
            SpellContext::AllyOnly
        } else {
            SpellContext::Both
        }
    }
}

/// Stats are stored as nibbles and scaled on load.
fn stat(nibble: u8) -> u8 {
    5 + 2 * nibble
}

pub fn decode_creature(record: RawRecord<'_>, decoder: &TextDecoder) -> Creature {
    let (endurance, intelligence) = record.nibbles_at(12);
    let (strength, speed) = record.nibbles_at(13);
    let (luck, _) = record.nibbles_at(14);
    let (ally_spell_count, enemy_spell_count) = record.nibbles_at(17);

    Creature {
        num: record.number(),
        name: decoder.decode(record.slice(0..NAME_LEN)),
        level: record.u8_at(7),
        hp: record.u16_le_at(8),
        mp: record.u8_at(10),
        tribe: record.u8_at(11),
        endurance: stat(endurance),
        intelligence: stat(intelligence),
        strength: stat(strength),
        speed: stat(speed),
        luck: stat(luck),
        ally_spell_count,
        enemy_spell_count,
        spells: record.byte_list(18, MAX_SPELLS),
        experience: record.u16_le_at(22),
        sprite: record.index(),
    }
}

/// Decode the creature table, or `None` if this layout has no creature table.
pub fn gather_creatures(
    rom: &mut RomImage,
    layout: &Layout,
    decoder: &TextDecoder,
) -> Result<Option<Vec<Creature>>, RomError> {
    let Some(geometry) = layout.geometry(Table::Creatures) else {
        return Ok(None);
    };
    let table = read_table(rom, geometry)?;
    Ok(Some(
        table
            .records()
            .map(|record| decode_creature(record, decoder))
            .collect(),
    ))
}
