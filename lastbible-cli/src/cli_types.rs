//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lastbible_report::OutputFormat;

#[derive(Parser)]
#[command(name = "lastbible")]
#[command(about = "Extract game data from Last Bible ROM images", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Dump every data table to a JSON or HTML file
    Dump {
        /// Path to the ROM image
        rom: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Output format: json or html (default: json for .json paths,
        /// otherwise the configured default)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Overwrite the output file without asking
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },

    /// Identify a ROM and list which tables are available
    Info {
        /// Path to the ROM image
        rom: PathBuf,
    },

    /// Render the overworld map to a PNG file
    Worldmap {
        /// Path to the ROM image
        rom: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite the output file without asking
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dump() {
        let cli = Cli::parse_from([
            "lastbible", "dump", "rom.gbc", "-o", "out.json", "-f", "html", "-y", "--quiet",
        ]);
        assert!(cli.quiet);
        match cli.command {
            Commands::Dump {
                rom,
                output,
                format,
                yes,
            } => {
                assert_eq!(rom, PathBuf::from("rom.gbc"));
                assert_eq!(output, PathBuf::from("out.json"));
                assert_eq!(format, Some(OutputFormat::Html));
                assert!(yes);
            }
            _ => panic!("expected dump"),
        }
    }

    #[test]
    fn test_bad_format_is_rejected() {
        let result = Cli::try_parse_from(["lastbible", "dump", "rom.gbc", "-o", "x", "-f", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_dump_requires_output() {
        assert!(Cli::try_parse_from(["lastbible", "dump", "rom.gbc"]).is_err());
    }
}
