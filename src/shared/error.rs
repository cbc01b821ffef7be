use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit status of the `sbom-dashboard` binary.
///
/// A CI job can tell "the dashboard shows vulnerable components" apart
/// from "the dashboard could not be produced".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - dashboard rendered
    Success = 0,
    /// The filtered view contains vulnerable components and `--fail-on-vulnerable` was set
    VulnerableView = 1,
    /// Rejected command line (clap exits with this status itself)
    InvalidArguments = 2,
    /// Application error (invalid filter, config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Numeric status passed to `std::process::exit`
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Dashboard Rendered (0)"),
            ExitCode::VulnerableView => write!(f, "Vulnerable Components Shown (1)"),
            ExitCode::InvalidArguments => write!(f, "Usage Error (2)"),
            ExitCode::ApplicationError => write!(f, "Dashboard Failed (3)"),
        }
    }
}

/// Application-specific errors for the SBOM dashboard.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint next to each failure.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Unknown {field} filter: {value}\n\n💡 Hint: Valid values are: {options}")]
    InvalidFilter {
        field: String,
        value: String,
        options: String,
    },

    #[error("Failed to load the embedded SBOM snapshot\nDetails: {details}\n\n💡 Hint: The bundled snapshot must be a JSON document with `components` and `vulnerabilities` arrays")]
    SnapshotLoadError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config file: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    ConfigError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for domain value objects
    ///
    /// Carries no hint: the message ends up inside a one-line skip note.
    #[error("Validation error: {message}")]
    Validation { message: String },
}
