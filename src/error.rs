//! Error types for `structmd`.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `structmd` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful conversion.
    pub const SUCCESS: i32 = 0;

    /// Any failure: bad arguments, help requested, unloadable document,
    /// or a failed write.
    pub const ERROR: i32 = 1;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `structmd` operations.
///
/// The conversion core (`normalize`, `render`) is total; everything that can
/// fail lives at the I/O boundary and surfaces here.
#[derive(Debug, Error)]
pub enum StructmdError {
    /// Document loading error.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// I/O error while writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Document Loading Errors
// ============================================================================

/// Errors produced by the document loader.
///
/// These are the explicit "not loaded" signal: malformed or unreadable input
/// is reported here instead of propagating a fault into the core.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file could not be read.
    #[error("cannot read {path}: {source}")]
    Unreadable {
        /// Path to the input file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input file could not be parsed as JSON or YAML.
    #[error("parse error in {path}: {message}")]
    Parse {
        /// Path to the input file.
        path: PathBuf,
        /// Line number where the error occurred (if available).
        line: Option<usize>,
        /// Error message from the parser.
        message: String,
    },
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `structmd` operations.
pub type Result<T> = std::result::Result<T, StructmdError>;

// ============================================================================
// Tests
// ============================================================================
