//! Custom error types for the poem-corpus crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Only session-fatal conditions are represented here. A malformed data row
/// is not an error: the parser drops the row, logs a warning, and continues.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// An error originating from I/O operations (reading a local source file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP transport failed before a response was obtained.
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Fetch failed: server returned status {0}")]
    HttpStatus(u16),

    /// The fetched content has no usable header line.
    #[error("Empty input: no header row found")]
    EmptyInput,
}

/// A convenience `Result` type alias using the crate's `CorpusError` type.
pub type Result<T> = std::result::Result<T, CorpusError>;
