pub(crate) mod dump;
pub(crate) mod info;
pub(crate) mod worldmap;

use std::io::{self, BufRead, Write};
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use lastbible_core::RomImage;

use crate::CliError;

/// Print `prompt` and read one line; only `y` or `Y` counts as yes.
pub(crate) fn ask_yes_no<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

/// Make sure writing to `path` is allowed, asking on the terminal when it
/// already exists. A refusal is reported as [`CliError::Declined`].
pub(crate) fn confirm_overwrite(path: &Path, assume_yes: bool) -> Result<(), CliError> {
    if !path.exists() {
        return Ok(());
    }
    if assume_yes {
        log::debug!("overwriting {}", path.display());
        return Ok(());
    }
    let stdin = io::stdin();
    let yes = ask_yes_no(
        "Output file exists. Overwrite?",
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;
    if yes {
        Ok(())
    } else {
        Err(CliError::declined(path.display().to_string()))
    }
}

/// Open a ROM and log what it was identified as.
pub(crate) fn open_rom(path: &Path) -> Result<RomImage, CliError> {
    let rom = RomImage::open(path)?;
    let revision = rom.revision();
    log::info!(
        "Cartridge: {}",
        revision
            .display_name()
            .if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("Language: {}", revision.language().tag());
    Ok(rom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut output = Vec::new();
        let yes = ask_yes_no("Overwrite?", &mut input, &mut output).unwrap();
        (yes, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_yes_answers() {
        assert_eq!(ask("y\n"), (true, "Overwrite? [y/N] ".to_string()));
        assert!(ask("Y\n").0);
        assert!(ask("  y  \n").0);
    }

    #[test]
    fn test_everything_else_is_no() {
        assert!(!ask("\n").0);
        assert!(!ask("n\n").0);
        assert!(!ask("yes\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn test_missing_file_needs_no_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        assert!(confirm_overwrite(&dir.path().join("new.html"), false).is_ok());
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(confirm_overwrite(file.path(), true).is_ok());
    }
}
