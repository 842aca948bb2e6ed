//! # Inbound Ports (Driving Ports)
//!
//! The API the registry exposes to the client layer that talks to the
//! game service.
//!
//! Every method runs as one atomic unit of work against the store.

use crate::domain::entities::{Account, Ban, CredentialSecret};
use crate::domain::errors::RegistryError;

/// Account persistence.
pub trait AccountStoreApi {
    /// Create or overwrite the account called `name`.
    ///
    /// Idempotent: repeating the same call leaves one unchanged record. An
    /// existing account keeps its id.
    ///
    /// ## Errors
    ///
    /// - `Validation`: `name` is empty
    fn upsert_account(
        &self,
        name: &str,
        credential_secret: CredentialSecret,
        external_id: u64,
    ) -> Result<Account, RegistryError>;

    /// Reserve `name` with an abstract (credential-less) account.
    ///
    /// An existing account is returned unchanged, credentials included.
    ///
    /// ## Errors
    ///
    /// - `Validation`: `name` is empty
    fn register_placeholder(&self, name: &str) -> Result<Account, RegistryError>;

    /// Exact-match lookup by name.
    fn find_account(&self, name: &str) -> Result<Option<Account>, RegistryError>;
}

/// Ban persistence and attribution.
pub trait BanRegistryApi {
    /// Record a ban received over `egress_address`.
    ///
    /// Replaces any earlier ban on the same host. The attributed user is
    /// parsed from `raw_text`.
    ///
    /// ## Errors
    ///
    /// - `Format`: `raw_text` lacks two `_` separators
    /// - `Validation`: no host in `egress_address`, or `caused_by` is not a
    ///   stored account
    fn record_ban(
        &self,
        raw_text: &str,
        caused_by: Option<&Account>,
        egress_address: &str,
    ) -> Result<Ban, RegistryError>;

    /// Like [`record_ban`](Self::record_ban) but stores no attributed user
    /// and never parses `raw_text`.
    fn record_ban_unattributed(
        &self,
        raw_text: &str,
        caused_by: Option<&Account>,
        egress_address: &str,
    ) -> Result<Ban, RegistryError>;

    /// The ban on the host of `egress_address`, if any.
    fn is_host_banned(&self, egress_address: &str) -> Result<Option<Ban>, RegistryError>;

    /// True if the account called `name` owns a ban, or any ban names
    /// `name` as its attributed user (registered or not).
    fn is_account_banned(&self, name: &str) -> Result<bool, RegistryError>;

    /// Bans owned by the account called `name`, in host order.
    fn bans_for_account(&self, name: &str) -> Result<Vec<Ban>, RegistryError>;

    /// Bans whose notice names `name`, in host order.
    fn bans_attributed_to(&self, name: &str) -> Result<Vec<Ban>, RegistryError>;
}

/// Outcome of a combined identity and egress check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SafetyVerdict {
    /// Neither the host nor the account is banned.
    Safe,
    /// The egress host carries this ban.
    HostBanned(Ban),
    /// The account owns a ban or is named by one.
    AccountBanned,
}

impl SafetyVerdict {
    /// True only for [`SafetyVerdict::Safe`].
    pub fn is_safe(&self) -> bool {
        matches!(self, SafetyVerdict::Safe)
    }
}

/// Combined "may we use this identity over this egress" check.
pub trait SafetyGateApi {
    /// Check the host first, then the account, and report the first hit.
    fn assess(&self, name: &str, egress_address: &str) -> Result<SafetyVerdict, RegistryError>;

    /// False as soon as the host or the account is banned.
    fn check_safety(&self, name: &str, egress_address: &str) -> Result<bool, RegistryError> {
        Ok(self.assess(name, egress_address)?.is_safe())
    }
}
