//! Logger setup.
//!
//! User-facing output goes through `log::info!` so that `--quiet` and
//! `--logfile` apply to it uniformly.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};

use crate::CliError;

/// Log level for the given flags. `--quiet` wins over `--verbose`.
pub(crate) fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Writes everything to the console and an ANSI-stripped copy to a file.
pub(crate) struct TeeWriter<C, F> {
    console: C,
    file: F,
}

impl<C: Write, F: Write> TeeWriter<C, F> {
    pub(crate) fn new(console: C, file: F) -> Self {
        Self { console, file }
    }
}

impl<C: Write, F: Write> Write for TeeWriter<C, F> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

/// Install the global logger.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter(quiet, verbose));
    // Allow RUST_LOG to refine per-module levels.
    builder.parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        });
    }

    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter::new(
                io::stdout(),
                file,
            ))));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(level_filter(false, false), LevelFilter::Info);
        assert_eq!(level_filter(false, true), LevelFilter::Debug);
        assert_eq!(level_filter(true, false), LevelFilter::Warn);
        assert_eq!(level_filter(true, true), LevelFilter::Warn);
    }

    #[test]
    fn test_tee_strips_ansi_from_file_copy() {
        let mut console = Vec::new();
        let mut file = Vec::new();
        {
            let mut tee = TeeWriter::new(&mut console, &mut file);
            tee.write_all(b"\x1b[32mok\x1b[0m done\n").unwrap();
            tee.flush().unwrap();
        }
        assert_eq!(console, b"\x1b[32mok\x1b[0m done\n");
        assert_eq!(file, b"ok done\n");
    }
}
