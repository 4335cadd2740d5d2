//! Store-boundary error types.

use thiserror::Error;

/// Record-store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Table file access failed: {0}")]
    Io(String),

    #[error("Table file is not a valid JSON array: {0}")]
    Parse(String),

    #[error("Record rejected at store boundary: {0}")]
    Validation(String),

    #[error("Record not found")]
    NotFound,
}
