//! # Request Checksums (bs-01)
//!
//! Pure functions that reproduce the integrity tokens the game service
//! requires on write requests.
//!
//! ## Components
//!
//! | Module | Operation | Use Case |
//! |--------|-----------|----------|
//! | `xor` | Cyclic XOR, base64url | Reversible obfuscation layer |
//! | `chk` | SHA-1 → hex → XOR → base64url | Comment upload checksums |
//! | `credential` | Salted SHA-1 hex | Password digest ("gjp2") |
//!
//! No state and no I/O: every function is deterministic in its inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chk;
pub mod credential;
pub mod errors;
pub mod xor;

// Re-exports
pub use chk::{
    comment_checksum, generate_checksum, level_comment_checksum, profile_comment_checksum,
    ChecksumParams, CommentKind, COMMENT_PARAMS,
};
pub use credential::{credential_digest, CREDENTIAL_SALT};
pub use errors::ChecksumError;
pub use xor::{cyclic_xor, xor_decode, xor_encode, xor_with, XorKey};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
