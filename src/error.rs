//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The parser is strict and fails fast on any rule violation; the loader is tolerant
//! and reports parser failures to a diagnostic sink instead of surfacing them.

use thiserror::Error;

/// Errors raised by the strict single-line parser.
///
/// The `Display` output of each variant is observable behavior: the loader
/// forwards it verbatim to the diagnostic sink, and callers may match on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into exactly four comma-separated fields
    #[error("Wrong number of fields: {0}")]
    WrongFieldCount(String),

    /// One or more fields were empty after trimming
    #[error("Missing required field(s): {0}")]
    MissingField(String),

    /// The email field failed the lax email check
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

/// Errors raised by the bulk stream loader.
///
/// Malformed rows are never surfaced here; they are reported to the
/// diagnostic sink and dropped. Only stream-level failures abort a load.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Reading from the underlying stream failed
    #[error("Failed to read contact stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with LoadError
pub type LoadResult<T> = Result<T, LoadError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
