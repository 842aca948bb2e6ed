//! # Domain Errors
//!
//! Error types for the ban registry.
//!
//! "Not found" is never an error here: lookups return `Ok(None)`.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Malformed or missing input to a mutating call.
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    /// Ban notice text without the two `_` separators.
    #[error("Malformed ban notice: {0}")]
    Format(#[from] BanNoticeError),

    /// Storage engine failure, passed through unchanged.
    #[error(transparent)]
    Storage(#[from] KVStoreError),

    /// A stored record could not be encoded or decoded.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The store was written by an incompatible schema version.
    #[error("Schema version mismatch: store has {found}, expected {expected}")]
    SchemaMismatch { found: u32, expected: u32 },

    /// The configuration names a backend this build cannot open.
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl RegistryError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        RegistryError::Validation {
            reason: reason.into(),
        }
    }
}

/// Ban notice parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BanNoticeError {
    /// Fewer than two `_` separators were present.
    #[error("expected 2 '_' separators, found {found}")]
    MissingSeparators { found: usize },
}

/// Key-value store errors.
#[derive(Debug, Clone, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Data corruption in the store.
    #[error("KV store corruption: {message}")]
    CorruptionError { message: String },
}

/// Serialization errors.
#[derive(Debug, Clone, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}
