//! Error types for staffq-ops operations.

use std::io;
use thiserror::Error;

/// The error type for staffq-ops operations.
///
/// Query operators themselves are infallible; errors only arise when
/// result rows are written out.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while writing rows.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A row could not be serialized to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for staffq-ops operations.
pub type Result<T> = std::result::Result<T, Error>;
