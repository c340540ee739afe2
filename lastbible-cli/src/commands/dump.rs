use std::path::{Path, PathBuf};
use std::time::Instant;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lastbible_core::RomError;
use lastbible_data::Database;
use lastbible_report::OutputFormat;

use crate::CliError;
use crate::commands::{confirm_overwrite, open_rom};
use crate::settings::Settings;
use crate::spinner::Spinner;

/// Pick the output format: explicit flag, then a `.json` extension, then
/// the configured default.
pub(crate) fn resolve_format(
    flag: Option<OutputFormat>,
    output: &Path,
    default: OutputFormat,
) -> OutputFormat {
    flag.or_else(|| match OutputFormat::from_path(output) {
        Some(OutputFormat::Json) => Some(OutputFormat::Json),
        _ => None,
    })
    .unwrap_or(default)
}

/// Run the dump command.
pub(crate) fn run_dump(
    rom_path: PathBuf,
    output: PathBuf,
    format: Option<OutputFormat>,
    yes: bool,
    settings: &Settings,
    quiet: bool,
) -> Result<(), CliError> {
    let start = Instant::now();
    let format = resolve_format(format, &output, settings.output.default_format);

    let mut rom = open_rom(&rom_path)?;
    log::info!(
        "Output Path: {}",
        output.display().if_supports_color(Stdout, |t| t.cyan())
    );
    log::info!("Output Format: {}", format);

    let revision = rom.revision();
    if !revision.supports_full_dump() {
        return Err(RomError::unsupported(revision, "dumping this release").into());
    }

    confirm_overwrite(&output, yes || settings.output.assume_yes)?;

    let spinner = Spinner::start("Reading tables...", quiet);
    let db = Database::gather(&mut rom)?;
    spinner.set_message(format!("Writing {}...", format));
    let contents = format.render(&mut rom, &db)?;
    spinner.finish();

    std::fs::write(&output, contents)?;

    log::info!(
        "{} Done in {:.3}s.",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lastbible_core::Revision;

    fn write_rom(dir: &Path, revision: Revision, size: usize) -> PathBuf {
        let mut data = vec![0u8; size];
        data[0x134..0x144].copy_from_slice(revision.fingerprint());
        let path = dir.join("rom.gbc");
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_resolve_format() {
        let html = OutputFormat::Html;
        let json = OutputFormat::Json;
        assert_eq!(resolve_format(None, Path::new("db.json"), html), json);
        assert_eq!(resolve_format(None, Path::new("db.html"), html), html);
        assert_eq!(resolve_format(None, Path::new("db.txt"), html), html);
        assert_eq!(resolve_format(None, Path::new("db.txt"), json), json);
        // an .html path does not override a json default
        assert_eq!(resolve_format(None, Path::new("db.html"), json), json);
        assert_eq!(resolve_format(Some(html), Path::new("db.json"), json), html);
    }

    #[test]
    fn test_dump_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let rom = write_rom(dir.path(), Revision::GbcEn, 0x48000);
        let output = dir.path().join("db.json");

        run_dump(rom, output.clone(), None, false, &Settings::default(), true).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("\"revision\": \"gbc-en\""));
        assert!(text.contains("\"string_pages\": null"));
    }

    #[test]
    fn test_dump_refuses_japanese_release() {
        let dir = tempfile::tempdir().unwrap();
        let rom = write_rom(dir.path(), Revision::GbcJp, 0x48000);
        let output = dir.path().join("db.html");

        let err = run_dump(rom, output.clone(), None, true, &Settings::default(), true)
            .unwrap_err();
        assert!(matches!(
            err,
            CliError::Rom(RomError::UnsupportedRevision { .. })
        ));
        assert_eq!(err.exit_code(), 1);
        assert!(!output.exists());
    }

    #[test]
    fn test_dump_overwrites_with_yes() {
        let dir = tempfile::tempdir().unwrap();
        let rom = write_rom(dir.path(), Revision::GbcEn, 0x48000);
        let output = dir.path().join("db.json");
        std::fs::write(&output, "old").unwrap();

        run_dump(rom, output.clone(), None, true, &Settings::default(), true).unwrap();
        assert_ne!(std::fs::read_to_string(&output).unwrap(), "old");
    }

    #[test]
    fn test_unknown_rom_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.gb");
        std::fs::write(&path, vec![0u8; 0x8000]).unwrap();
        let err = run_dump(
            path,
            dir.path().join("db.json"),
            None,
            true,
            &Settings::default(),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Rom(RomError::UnknownRevision { .. })));
    }
}
