//! Item table (23-byte records).

use bitflags::bitflags;
use serde::Serialize;

use lastbible_core::{Layout, RomError, RomImage, Table};

use crate::table::{RawRecord, SENTINEL, read_table};
use crate::text::{Text, TextDecoder};

const NAME_LEN: usize = 12;

/// Sell price marking an item that cannot be sold.
pub const NOT_FOR_SALE: u16 = 0xFFFF;

bitflags! {
    /// Usability byte of an item record.
    ///
    /// Bits 0..2 mark the three playable characters in party order
    /// (`MEMBER_1` is the first party slot). Bits 6 and 7 mark where the
    /// item can be used.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(transparent)]
    pub struct ItemFlags: u8 {
        const MEMBER_1 = 0x01;
        const MEMBER_2 = 0x02;
        const MEMBER_3 = 0x04;
        const FIELD = 0x40;
        const BATTLE = 0x80;
    }
}

impl ItemFlags {
    /// Whether party member `member` (0..3) can equip or use the item.
    pub fn usable_by(self, member: usize) -> bool {
        match member {
            0 => self.contains(Self::MEMBER_1),
            1 => self.contains(Self::MEMBER_2),
            2 => self.contains(Self::MEMBER_3),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub num: usize,
    pub name: Text,
    pub flags: ItemFlags,
    pub sell_price: u16,
    pub buy_price: u16,
    pub offense: u8,
    pub defense: u8,
    /// Effect triggered on use; `None` when the record holds the sentinel.
    pub effect: Option<u8>,
}

impl Item {
    pub fn for_sale(&self) -> bool {
        self.sell_price != NOT_FOR_SALE
    }
}

/// Shops charge half again the sell price. The sum wraps at 16 bits the
/// same way the game's arithmetic does.
pub fn buy_price(sell: u16) -> u16 {
    sell.wrapping_add(sell / 2)
}

pub fn decode_item(record: RawRecord<'_>, decoder: &TextDecoder) -> Item {
    let sell_price = record.u16_le_at(13);
    let effect = match record.u8_at(17) {
        SENTINEL => None,
        id => Some(id),
    };
    Item {
        num: record.number(),
        name: decoder.decode(record.slice(0..NAME_LEN)),
        // Unknown bits are kept so the raw byte survives a JSON dump.
        flags: ItemFlags::from_bits_retain(record.u8_at(12)),
        sell_price,
        buy_price: buy_price(sell_price),
        offense: record.u8_at(15),
        defense: record.u8_at(16),
        effect,
    }
}

pub fn gather_items(
    rom: &mut RomImage,
    layout: &Layout,
    decoder: &TextDecoder,
) -> Result<Option<Vec<Item>>, RomError> {
    let Some(geometry) = layout.geometry(Table::Items) else {
        return Ok(None);
    };
    let table = read_table(rom, geometry)?;
    Ok(Some(
        table
            .records()
            .map(|record| decode_item(record, decoder))
            .collect(),
    ))
}
