//! # Cyclic XOR Obfuscation
//!
//! The reversible half of the checksum pipeline: a repeating-key XOR
//! followed by URL-safe base64 (with padding).

use crate::ChecksumError;
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

/// A non-empty XOR key.
///
/// Holding an `XorKey` proves the key has at least one byte, so the
/// operations taking one cannot fail on key length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XorKey<'a>(&'a [u8]);

impl<'a> XorKey<'a> {
    /// Wrap a key, rejecting the empty slice.
    pub fn new(key: &'a [u8]) -> Result<Self, ChecksumError> {
        if key.is_empty() {
            return Err(ChecksumError::EmptyKey);
        }
        Ok(Self(key))
    }

    /// Get the raw key bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }
}

impl XorKey<'static> {
    /// Wrap a compile-time key. Evaluated in a `const` item, an empty key
    /// fails the build.
    pub const fn from_static(key: &'static [u8]) -> Self {
        assert!(!key.is_empty(), "XOR key must not be empty");
        Self(key)
    }
}

/// XOR `data` against `key` repeated to the length of `data`.
///
/// `output[i] = data[i] ^ key[i % key.len()]`.
///
/// # Errors
///
/// Returns `ChecksumError::EmptyKey` if `key` is empty.
pub fn cyclic_xor(data: &[u8], key: &[u8]) -> Result<Vec<u8>, ChecksumError> {
    Ok(xor_with(data, XorKey::new(key)?))
}

/// XOR with a key already known to be non-empty.
pub fn xor_with(data: &[u8], key: XorKey<'_>) -> Vec<u8> {
    data.iter()
        .zip(key.as_bytes().iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}

/// Cyclic XOR followed by URL-safe base64 with padding.
///
/// The result is ASCII.
///
/// # Errors
///
/// Returns `ChecksumError::EmptyKey` if `key` is empty.
pub fn xor_encode(data: &[u8], key: &[u8]) -> Result<Vec<u8>, ChecksumError> {
    Ok(encode_with(data, XorKey::new(key)?))
}

pub(crate) fn encode_with(data: &[u8], key: XorKey<'_>) -> Vec<u8> {
    URL_SAFE.encode(xor_with(data, key)).into_bytes()
}

/// Inverse of [`xor_encode`]: base64-decode, then re-apply the XOR.
///
/// # Errors
///
/// - `ChecksumError::EmptyKey` if `key` is empty
/// - `ChecksumError::InvalidEncoding` if `token` is not URL-safe base64
pub fn xor_decode(token: &[u8], key: &[u8]) -> Result<Vec<u8>, ChecksumError> {
    let key = XorKey::new(key)?;
    let raw = URL_SAFE
        .decode(token)
        .map_err(|e| ChecksumError::InvalidEncoding(e.to_string()))?;
    Ok(xor_with(&raw, key))
}
