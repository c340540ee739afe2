use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lastbible_data::render_world_map;
use lastbible_report::png::save_png;

use crate::CliError;
use crate::commands::{confirm_overwrite, open_rom};
use crate::settings::Settings;
use crate::spinner::Spinner;

/// Run the worldmap command.
pub(crate) fn run_worldmap(
    rom_path: PathBuf,
    output: PathBuf,
    yes: bool,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let mut rom = open_rom(&rom_path)?;
    let layout = rom.layout();
    // Fail on releases without a map before touching the output file.
    layout.world_map()?;

    confirm_overwrite(&output, yes || settings.output.assume_yes)?;

    let spinner = Spinner::start("Rendering world map...", quiet);
    let img = render_world_map(&mut rom, &layout)?;
    save_png(&img, &output)?;
    spinner.finish();

    log::info!(
        "{} Wrote {}x{} map to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        img.width(),
        img.height(),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
