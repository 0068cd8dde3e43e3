//! Error types for the finstat-core library.
//!
//! The extraction engine itself is infallible: any string input, including
//! the empty string, produces a (possibly empty) statement. Errors exist
//! only at the ingestion boundary, where a failed upstream stage must be
//! reported as a named failure kind rather than masked as an empty
//! document.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the finstat library.
#[derive(Error, Debug)]
pub enum FinstatError {
    /// Source document ingestion error.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the upstream recognition pipeline, surfaced distinctly so
/// callers can tell a broken stage from a genuinely blank document.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source document does not exist.
    #[error("source document not found: {0}")]
    DocumentNotFound(PathBuf),

    /// The recognition engine output could not be read.
    #[error("recognition engine unavailable: {0}")]
    RecognitionUnavailable(String),

    /// Recognition produced no text at all.
    #[error("recognition produced empty text for {0}")]
    EmptyRecognition(PathBuf),
}

/// Result type for the finstat library.
pub type Result<T> = std::result::Result<T, FinstatError>;
