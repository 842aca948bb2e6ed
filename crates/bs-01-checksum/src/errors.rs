//! Checksum error types.

use thiserror::Error;

/// Errors raised while deriving or decoding checksum tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// The XOR key was empty; cyclic XOR is undefined for it.
    #[error("XOR key must not be empty")]
    EmptyKey,

    /// The token was not valid URL-safe base64.
    #[error("Invalid token encoding: {0}")]
    InvalidEncoding(String),
}
