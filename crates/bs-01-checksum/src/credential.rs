//! Credential digest ("gjp2").
//!
//! Lets a client authenticate with a digest of its password instead of the
//! password itself.

use crate::chk::salted_sha1_hex;

/// Constant appended to the secret before hashing.
pub const CREDENTIAL_SALT: &[u8] = b"mI29fmAnxgTs";

/// Lowercase hex SHA-1 of `secret ‖ CREDENTIAL_SALT`.
pub fn credential_digest(secret: &[u8]) -> String {
    salted_sha1_hex(secret, CREDENTIAL_SALT)
}
