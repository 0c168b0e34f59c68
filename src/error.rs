//! Error types for gradient-picker operations.
//!
//! The mapping and formatting functions are total and never produce these;
//! only strict parsers and configuration loading do.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gradient-picker operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (reading a configuration file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Gradient string parsing error.
    #[error("Invalid gradient: {0}")]
    InvalidGradient(String),

    /// Configuration parse error.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line number reported by the parser (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}
