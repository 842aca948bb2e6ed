//! # Key Layout
//!
//! Maps the logical `account` and `ban` tables onto a flat key space.
//!
//! | Prefix | Key | Value |
//! |--------|-----|-------|
//! | `a:` | `a:{name}` | `Account` |
//! | `b:` | `b:{host}` | `Ban` |
//! | `o:` | `o:{account_id:be64}{host}` | empty (bans owned by an account) |
//! | `u:` | `u:{len:be32}{user}{host}` | empty (bans naming a user) |
//! | `m:` | `m:schema`, `m:seq:*` | metadata |
//!
//! The user index length-prefixes the name so that `u:` scans for `bob`
//! never match `bobby`.

use super::entities::AccountId;

/// Current on-disk schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Key prefixes for the different record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Account by name: `a:{name}` -> Account
    Account,
    /// Ban by host: `b:{host}` -> Ban
    Ban,
    /// Owner index: `o:{account_id}{host}` -> ()
    BanByOwner,
    /// Attributed-user index: `u:{len}{user}{host}` -> ()
    BanByUser,
    /// Metadata: `m:{name}`
    Metadata,
}

/// Monotonic id sequences kept in metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    /// Next account id.
    Account,
    /// Next ban id.
    Ban,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Account => b"a:",
            KeyPrefix::Ban => b"b:",
            KeyPrefix::BanByOwner => b"o:",
            KeyPrefix::BanByUser => b"u:",
            KeyPrefix::Metadata => b"m:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }

    /// Build an account key from a name.
    pub fn account_key(name: &str) -> Vec<u8> {
        KeyPrefix::Account.key(name.as_bytes())
    }

    /// Build a ban key from a normalized host.
    pub fn ban_key(host: &str) -> Vec<u8> {
        KeyPrefix::Ban.key(host.as_bytes())
    }

    /// Prefix shared by every owner-index entry of `account_id`.
    pub fn owner_prefix(account_id: AccountId) -> Vec<u8> {
        KeyPrefix::BanByOwner.key(&account_id.to_be_bytes())
    }

    /// Owner-index entry linking `account_id` to the ban on `host`.
    pub fn owner_key(account_id: AccountId, host: &str) -> Vec<u8> {
        let mut key = Self::owner_prefix(account_id);
        key.extend_from_slice(host.as_bytes());
        key
    }

    /// Prefix shared by every user-index entry naming `user`.
    pub fn user_prefix(user: &str) -> Vec<u8> {
        let len = u32::try_from(user.len()).unwrap_or(u32::MAX);
        let mut key = KeyPrefix::BanByUser.key(&len.to_be_bytes());
        key.extend_from_slice(user.as_bytes());
        key
    }

    /// User-index entry linking `user` to the ban on `host`.
    pub fn user_key(user: &str, host: &str) -> Vec<u8> {
        let mut key = Self::user_prefix(user);
        key.extend_from_slice(host.as_bytes());
        key
    }

    /// Get the schema version key.
    pub fn schema_key() -> Vec<u8> {
        KeyPrefix::Metadata.key(b"schema")
    }

    /// Get the key of an id sequence.
    pub fn sequence_key(sequence: Sequence) -> Vec<u8> {
        match sequence {
            Sequence::Account => KeyPrefix::Metadata.key(b"seq:account"),
            Sequence::Ban => KeyPrefix::Metadata.key(b"seq:ban"),
        }
    }
}
