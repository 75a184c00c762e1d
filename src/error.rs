//! Error types for the interface generator
//!
//! This module provides structured error types using thiserror. Every kind
//! except [`GenError::ReceiverTypeUnresolved`] is fatal and aborts the run.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a generation run
#[derive(Error, Debug)]
pub enum GenError {
    /// None of the candidate directories exist
    #[error("Package '{package}' not found. Looked in: {}", display_candidates(.candidates))]
    PackageNotFound {
        package: String,
        candidates: Vec<PathBuf>,
    },

    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk directory '{path}': {reason}")]
    Walk { path: PathBuf, reason: String },

    /// Parsing errors
    #[error("Failed to parse '{path}' at line {line}, column {column}: {reason}")]
    SourceParse {
        path: PathBuf,
        line: u32,
        column: u32,
        reason: String,
    },

    #[error("Failed to initialize Go parser: {reason}")]
    ParserInit { reason: String },

    /// Import checking errors
    #[error("Cannot resolve import \"{import}\" in '{path}': {reason}")]
    SemanticResolution {
        path: PathBuf,
        import: String,
        reason: String,
    },

    /// Receiver type could not be reduced to a single name
    #[error("Receiver type of method '{method}' not resolved: {reason}")]
    ReceiverTypeUnresolved { method: String, reason: String },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },
}

fn display_candidates(candidates: &[PathBuf]) -> String {
    if candidates.is_empty() {
        return "<no candidates>".to_string();
    }
    candidates
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl GenError {
    /// Whether this error aborts the whole run.
    ///
    /// An unresolved receiver only drops the offending method.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::ReceiverTypeUnresolved { .. })
    }

    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> String {
        match self {
            Self::PackageNotFound { .. } => "PACKAGE_NOT_FOUND",
            Self::SourceRead { .. } => "SOURCE_READ_ERROR",
            Self::Walk { .. } => "WALK_ERROR",
            Self::SourceParse { .. } => "SOURCE_PARSE_ERROR",
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::SemanticResolution { .. } => "SEMANTIC_RESOLUTION_ERROR",
            Self::ReceiverTypeUnresolved { .. } => "RECEIVER_TYPE_UNRESOLVED",
            Self::Config { .. } => "CONFIG_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::PackageNotFound { .. } => vec![
                "Check the package path relative to the current directory",
                "Set GOPATH or GOROOT (or --workspace-root / --system-root) to search there",
            ],
            Self::SourceRead { .. } | Self::Walk { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::SourceParse { .. } => vec![
                "Run 'gofmt -l' on the package to locate the syntax error",
            ],
            Self::SemanticResolution { .. } => vec![
                "Check the import path for typos",
                "Disable checker.require_resolvable_imports to skip import lookup",
            ],
            Self::Config { .. } => vec!["Check .ifacegen.toml and IFACEGEN_* variables"],
            _ => vec![],
        }
    }
}

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;
