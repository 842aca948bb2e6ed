//! # Domain Entities
//!
//! Bot accounts and the bans recorded against them.

use bs_01_checksum::{credential_digest, level_comment_checksum, profile_comment_checksum};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

/// Store-assigned account identifier.
pub type AccountId = u64;

/// Store-assigned ban identifier.
pub type BanId = u64;

/// An account password as raw bytes.
///
/// `Debug` is redacted and there is no `Display`; the bytes are wiped on
/// drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(transparent)]
#[zeroize(drop)]
pub struct CredentialSecret(Vec<u8>);

impl CredentialSecret {
    /// Wrap raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Get the secret bytes.
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for CredentialSecret {
    fn from(password: &str) -> Self {
        Self::new(password.as_bytes())
    }
}

impl fmt::Debug for CredentialSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CredentialSecret([REDACTED])")
    }
}

/// A bot account.
///
/// An account with neither a secret nor an external id is *abstract*: a
/// placeholder reserved during registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Primary key.
    pub id: AccountId,
    /// Display name, unique within the store.
    pub name: String,
    /// Password bytes, absent for abstract accounts.
    pub credential_secret: Option<CredentialSecret>,
    /// Account id on the game service, absent for abstract accounts.
    pub external_id: Option<u64>,
}

impl Account {
    /// True for credential-less placeholder accounts.
    pub fn is_abstract(&self) -> bool {
        self.credential_secret.is_none() && self.external_id.is_none()
    }

    /// Password digest sent in place of the password. `None` without a secret.
    pub fn credential_digest(&self) -> Option<String> {
        self.credential_secret
            .as_ref()
            .map(|secret| credential_digest(secret.expose()))
    }

    /// Checksum for a comment on this account's own profile.
    pub fn profile_comment_checksum(&self, content: &str) -> Vec<u8> {
        profile_comment_checksum(&self.name, content)
    }

    /// Checksum for a comment by this account on `level_id`.
    pub fn level_comment_checksum(&self, content: &str, level_id: u64, percentage: u8) -> Vec<u8> {
        level_comment_checksum(&self.name, content, level_id, percentage)
    }
}

/// A ban recorded against an egress host.
///
/// At most one ban exists per host; a newer notice overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ban {
    /// Primary key, kept when the ban is overwritten.
    pub id: BanId,
    /// Normalized egress host (IP or hostname).
    pub host: String,
    /// Notice text as delivered by the service.
    pub raw_text: String,
    /// User named in the notice, which may or may not be ours.
    pub attributed_user: Option<String>,
    /// Account that was in use when the ban arrived.
    pub account_id: Option<AccountId>,
}
