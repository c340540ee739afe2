//! Effect table: spells, skills and item effects (14-byte records).

use bitflags::bitflags;
use serde::Serialize;

use lastbible_core::{Layout, RomError, RomImage, Table};

use crate::table::{RawRecord, read_table};
use crate::text::{Text, TextDecoder};

const NAME_LEN: usize = 12;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(transparent)]
    pub struct EffectFlags: u8 {
        const FIELD = 0x01;
        const BATTLE = 0x02;
        const FULL_STACK = 0x10;
        const ALL_TARGETS = 0x20;
        const ENEMIES_ONLY = 0x40;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Effect {
    pub num: usize,
    pub name: Text,
    pub flags: EffectFlags,
    /// MP cost
    pub cost: u8,
}

impl Effect {
    pub fn usable_in_field(&self) -> bool {
        self.flags.contains(EffectFlags::FIELD)
    }

    pub fn usable_in_battle(&self) -> bool {
        self.flags.contains(EffectFlags::BATTLE)
    }
}

pub fn decode_effect(record: RawRecord<'_>, decoder: &TextDecoder) -> Effect {
    Effect {
        num: record.number(),
        name: decoder.decode(record.slice(0..NAME_LEN)),
        flags: EffectFlags::from_bits_retain(record.u8_at(12)),
        cost: record.u8_at(13),
    }
}

pub fn gather_effects(
    rom: &mut RomImage,
    layout: &Layout,
    decoder: &TextDecoder,
) -> Result<Option<Vec<Effect>>, RomError> {
    let Some(geometry) = layout.geometry(Table::Effects) else {
        return Ok(None);
    };
    let table = read_table(rom, geometry)?;
    Ok(Some(
        table
            .records()
            .map(|record| decode_effect(record, decoder))
            .collect(),
    ))
}
