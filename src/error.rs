//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Malformed date, time, amount or ledger line
    #[error("Parse error: {0}")]
    Parse(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Unrecognized menu input
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Values that parse but cannot be stored
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Create a parse error for a specific line of the ledger file
    pub fn parse_at_line(line: u64, message: impl std::fmt::Display) -> Self {
        Self::Parse(format!("line {}: {}", line, message))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Check if this is an I/O error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(err.to_string())
        } else {
            Self::Parse(err.to_string())
        }
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
