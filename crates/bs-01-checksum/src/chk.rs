//! # Request Checksums ("chk")
//!
//! Every checksum variant shares one pipeline:
//!
//! ```text
//! plaintext ─→ SHA-1(plaintext ‖ salt) ─→ lowercase hex ─→ cyclic XOR(key) ─→ base64url
//! ```
//!
//! Variants differ only in how the plaintext is assembled and in the
//! `(key, salt)` pair, captured here as [`ChecksumParams`].

use crate::xor::{encode_with, XorKey};
use crate::ChecksumError;
use sha1::{Digest, Sha1};

/// The fixed `(key, salt)` pair of one checksum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecksumParams {
    /// XOR key applied to the hex digest.
    pub key: XorKey<'static>,
    /// Salt appended to the plaintext before hashing.
    pub salt: &'static [u8],
}

impl ChecksumParams {
    /// Run the checksum pipeline over `value`.
    pub fn derive(&self, value: &[u8]) -> Vec<u8> {
        encode_with(&salted_sha1_hex(value, self.salt).into_bytes(), self.key)
    }
}

/// Parameters for comment uploads. Profile and level comments use the same
/// pair; the plaintext fields select the context.
pub const COMMENT_PARAMS: ChecksumParams = ChecksumParams {
    key: XorKey::from_static(b"29481"),
    salt: b"xPT6iUrtws0J",
};

/// Comment context, encoded as the trailing `commentType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommentKind {
    /// Comment on an account profile (`commentType = 0`).
    #[default]
    Profile,
    /// Comment on a level (`commentType = 1`).
    Level,
}

impl CommentKind {
    /// Wire value of the comment type.
    pub fn code(self) -> u8 {
        match self {
            CommentKind::Profile => 0,
            CommentKind::Level => 1,
        }
    }
}

/// Lowercase hex SHA-1 of `value ‖ salt`.
pub(crate) fn salted_sha1_hex(value: &[u8], salt: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(value);
    hasher.update(salt);
    hex::encode(hasher.finalize())
}

/// Derive a checksum with an arbitrary key and salt.
///
/// One-way: there is no decode path back to `value`, only
/// [`crate::xor_decode`] back to the hex digest.
///
/// # Errors
///
/// Returns `ChecksumError::EmptyKey` if `key` is empty.
pub fn generate_checksum(value: &[u8], key: &[u8], salt: &[u8]) -> Result<Vec<u8>, ChecksumError> {
    let key = XorKey::new(key)?;
    Ok(encode_with(&salted_sha1_hex(value, salt).into_bytes(), key))
}

/// Checksum for a comment upload.
///
/// The plaintext is `username`, `content`, `id`, `percentage` and the
/// comment type code rendered as text and concatenated with no separators.
/// `id = 0` with [`CommentKind::Profile`] is the profile-comment context.
pub fn comment_checksum(
    username: &str,
    content: &str,
    id: u64,
    percentage: u8,
    kind: CommentKind,
) -> Vec<u8> {
    let plaintext = format!("{username}{content}{id}{percentage}{}", kind.code());
    COMMENT_PARAMS.derive(plaintext.as_bytes())
}

/// Checksum for a profile comment (`id = 0`, `percentage = 0`, type 0).
pub fn profile_comment_checksum(username: &str, content: &str) -> Vec<u8> {
    comment_checksum(username, content, 0, 0, CommentKind::Profile)
}

/// Checksum for a comment on `level_id`.
pub fn level_comment_checksum(
    username: &str,
    content: &str,
    level_id: u64,
    percentage: u8,
) -> Vec<u8> {
    comment_checksum(username, content, level_id, percentage, CommentKind::Level)
}
