use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lastbible_core::util::format_bytes;
use lastbible_core::{Layout, Table};

use crate::CliError;
use crate::commands::open_rom;

const TABLES: [Table; 6] = [
    Table::Creatures,
    Table::CreatureSprites,
    Table::Items,
    Table::Effects,
    Table::StringPages,
    Table::WorldMap,
];

/// One line per table: its name and where it lives, or that it is unknown.
pub(crate) fn describe_tables(layout: &Layout) -> Vec<(Table, Option<String>)> {
    TABLES
        .iter()
        .map(|&table| {
            let location = match table {
                Table::StringPages => layout
                    .string_pages()
                    .map(|pages| format!("{} pages", pages.len())),
                Table::WorldMap => layout
                    .world_map()
                    .ok()
                    .map(|map| format!("{}x{} blocks at {:#x}", map.width, map.height, map.map_offset)),
                _ => layout.geometry(table).map(|g| {
                    format!(
                        "{} x {} bytes at {:#x}",
                        g.record_count, g.record_size, g.offset
                    )
                }),
            };
            (table, location)
        })
        .collect()
}

/// Run the info command.
pub(crate) fn run_info(rom_path: PathBuf) -> Result<(), CliError> {
    let rom = open_rom(&rom_path)?;
    let revision = rom.revision();
    log::info!("Revision: {}", revision.short_name());
    log::info!("Size: {}", format_bytes(rom.size()));
    log::info!(
        "Full dump: {}",
        if revision.supports_full_dump() {
            "supported".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "not supported".if_supports_color(Stdout, |t| t.yellow()).to_string()
        }
    );

    log::info!("");
    log::info!("{}", "Tables:".if_supports_color(Stdout, |t| t.bold()));
    for (table, location) in describe_tables(&rom.layout()) {
        match location {
            Some(location) => log::info!(
                "  {} {:<16} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                table.name(),
                location.if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::info!(
                "  {} {:<16} {}",
                "-".if_supports_color(Stdout, |t| t.dimmed()),
                table.name(),
                "not available".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        }
    }
    Ok(())
}
