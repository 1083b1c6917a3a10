//! Error types for probdex
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Malformed queries are never errors: empty, whitespace-only, and unmatched
//! queries all produce empty success results. The only contract violation the
//! engine rejects is a zero result bound (`InvalidLimit`).

use std::io;
use thiserror::Error;

/// Result type alias for probdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for probdex
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (catalog file operations)
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Catalog deserialization error
    #[error("Catalog parse error: {0}")]
    ParseError(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Difficulty name outside the fixed Easy/Medium/Hard set
    #[error("Unknown difficulty: {0:?}")]
    UnknownDifficulty(String),

    /// Result bound must be positive; zero is rejected, not clamped
    #[error("Invalid result limit: {0} (must be positive)")]
    InvalidLimit(usize),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}
