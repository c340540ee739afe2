use thiserror::Error;

use lastbible_core::RomError;
use lastbible_report::ReportError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Reading or decoding the ROM failed
    #[error("{0}")]
    Rom(#[from] RomError),

    /// Rendering the output failed
    #[error("{0}")]
    Report(#[from] ReportError),

    /// Logger setup failed
    #[error("Logging error: {0}")]
    Logging(String),

    /// The user declined to overwrite an existing file
    #[error("Not overwriting {0}")]
    Declined(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    pub(crate) fn declined(path: impl Into<String>) -> Self {
        Self::Declined(path.into())
    }

    /// Process exit status for this error.
    pub(crate) fn exit_code(&self) -> i32 {
        match self {
            Self::Declined(_) => 2,
            _ => 1,
        }
    }
}
