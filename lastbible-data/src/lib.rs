//! Decoders for the game data tables of Last Bible cartridge images.
//!
//! Each table has a `gather_*` function that reads it through the image's
//! [`Layout`](lastbible_core::Layout) and returns `None` when the layout
//! does not know where the table is. [`Database`] runs all of them.
//!
//! Graphics are decoded separately: [`tiles`] renders creature sprites and
//! [`worldmap`] renders the overworld of the original Game Boy release.

pub mod charset;
pub mod creatures;
pub mod database;
pub mod effects;
pub mod items;
pub mod sprites;
pub mod strings;
pub mod table;
pub mod text;
pub mod tiles;
pub mod worldmap;

pub use creatures::{Creature, SpellContext};
pub use database::Database;
pub use effects::{Effect, EffectFlags};
pub use items::{Item, ItemFlags};
pub use sprites::Sprite;
pub use strings::StringPage;
pub use text::{Text, TextDecoder, TextToken, TextView};
pub use tiles::{render_sprite, render_tiles};
pub use worldmap::render_world_map;
