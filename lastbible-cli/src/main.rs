//! lastbible CLI
//!
//! Command-line interface for extracting game data from Last Bible ROMs.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let settings = Settings::load();
    let quiet = cli.quiet;

    let result = match cli.command {
        Commands::Dump {
            rom,
            output,
            format,
            yes,
        } => commands::dump::run_dump(rom, output, format, yes, &settings, quiet),
        Commands::Info { rom } => commands::info::run_info(rom),
        Commands::Worldmap { rom, output, yes } => {
            commands::worldmap::run_worldmap(rom, output, yes, &settings, quiet)
        }
    };

    if let Err(e) = result {
        match e {
            CliError::Declined(_) => log::warn!("{e}"),
            _ => log::error!("{e}"),
        }
        std::process::exit(e.exit_code());
    }
}
