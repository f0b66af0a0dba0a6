//! Error types for recordbook
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using RecordError
pub type Result<T> = std::result::Result<T, RecordError>;

/// Unified error type for recordbook operations
#[derive(Debug, Error)]
pub enum RecordError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("GPA must be a number, got {0:?}")]
    InvalidGpaFormat(String),

    #[error("GPA must be between 0.0 and 4.0, got {0}")]
    GpaOutOfRange(f64),

    // -------------------------------------------------------------------------
    // Codec Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record line: expected {expected} fields, got {found}")]
    MalformedLine { expected: usize, found: usize },
}
