//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - interface rendered (possibly with no methods)
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific fatal errors
//! - `126-255`: Reserved by shell

use crate::error::GenError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Target package directory not found (code 3)
    NotFound = 3,

    /// Failed to parse files (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,

    /// Import could not be resolved (code 7)
    ResolutionError = 7,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl ExitCode {
    /// Convert a `GenError` to the appropriate exit code.
    pub fn from_error(error: &GenError) -> Self {
        match error {
            GenError::PackageNotFound { .. } => ExitCode::NotFound,
            GenError::SourceParse { .. } => ExitCode::ParseError,
            GenError::SourceRead { .. } | GenError::Walk { .. } => ExitCode::IoError,
            GenError::Config { .. } => ExitCode::ConfigError,
            GenError::SemanticResolution { .. } => ExitCode::ResolutionError,

            // Everything else is a general error
            _ => ExitCode::GeneralError,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }

    /// Get a human-readable description of the exit code.
    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::NotFound => "Package not found",
            ExitCode::ParseError => "Parse error",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
            ExitCode::ResolutionError => "Import resolution error",
        }
    }
}
