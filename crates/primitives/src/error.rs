//! Error types for primitive parsing and conversion.

use thiserror::Error;

/// Error raised while building or parsing a primitive value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Input text is not in the expected format.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// What was wrong with the input.
        message: String,
    },

    /// Input bytes have the wrong length.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required length in bytes.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

/// Result type for primitive operations.
pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
