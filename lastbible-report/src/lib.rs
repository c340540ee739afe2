//! Output formats for decoded Last Bible data.

pub mod error;
pub mod html;
pub mod json;
pub mod png;

pub use error::ReportError;

use std::path::Path;

use serde::{Deserialize, Serialize};

use lastbible_core::RomImage;
use lastbible_data::Database;

/// Serialized form of a [`Database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Html,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
        }
    }

    /// The format implied by an output path, if its extension names one.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    /// Render `db` in this format. Only HTML reads sprite data from `rom`.
    pub fn render(&self, rom: &mut RomImage, db: &Database) -> Result<String, ReportError> {
        match self {
            Self::Json => json::to_json(db),
            Self::Html => html::write_database(rom, db),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(format!("format must be 'json' or 'html', got '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("out.json")),
            Some(OutputFormat::Json)
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("dir/OUT.HTML")),
            Some(OutputFormat::Html)
        );
        assert_eq!(OutputFormat::from_path(Path::new("out.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("out")), None);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_is_html() {
        assert_eq!(OutputFormat::default(), OutputFormat::Html);
        assert_eq!(OutputFormat::default().to_string(), "html");
    }
}
