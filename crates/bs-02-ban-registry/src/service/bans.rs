//! # Ban Registry Implementation

use super::*;
use crate::domain::ban_notice::extract_attributed_user;
use crate::domain::egress::egress_host;
use crate::domain::entities::{Account, Ban};
use crate::ports::inbound::BanRegistryApi;

impl<KV, RS> Txn<'_, KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    pub(super) fn host_ban(&self, host: &str) -> Result<Option<Ban>, RegistryError> {
        self.load(&KeyPrefix::ban_key(host))
    }

    /// Both clauses of the account check, evaluated in one snapshot.
    pub(super) fn account_banned(&self, name: &str) -> Result<bool, RegistryError> {
        if let Some(account) = self.load::<Account>(&KeyPrefix::account_key(name))? {
            if !self
                .store
                .prefix_scan(&KeyPrefix::owner_prefix(account.id))?
                .is_empty()
            {
                return Ok(true);
            }
        }
        Ok(!self
            .store
            .prefix_scan(&KeyPrefix::user_prefix(name))?
            .is_empty())
    }

    /// Load the bans an index prefix points at. Index keys end in the host.
    fn bans_by_index(&self, prefix: &[u8]) -> Result<Vec<Ban>, RegistryError> {
        let mut bans = Vec::new();
        for (key, _) in self.store.prefix_scan(prefix)? {
            let host = std::str::from_utf8(&key[prefix.len()..]).map_err(|_| {
                KVStoreError::CorruptionError {
                    message: "ban index entry holds a non-UTF-8 host".to_string(),
                }
            })?;
            match self.host_ban(host)? {
                Some(ban) => bans.push(ban),
                None => {
                    return Err(KVStoreError::CorruptionError {
                        message: format!("ban index points at missing host {host}"),
                    }
                    .into())
                }
            }
        }
        Ok(bans)
    }
}

impl<KV, RS> RegistryService<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    /// Upsert the ban on `host`, keeping its id and swapping its index
    /// entries in the same batch.
    fn store_ban(
        &self,
        host: String,
        raw_text: &str,
        attributed_user: Option<String>,
        caused_by: Option<&Account>,
    ) -> Result<Ban, RegistryError> {
        let ban = self.write_txn(|txn, ops| {
            let account_id = match caused_by {
                Some(account) => {
                    let stored: Option<Account> =
                        txn.load(&KeyPrefix::account_key(&account.name))?;
                    match stored {
                        Some(stored) if stored.id == account.id => Some(stored.id),
                        _ => {
                            return Err(RegistryError::validation(format!(
                                "account {:?} (id {}) is not in the registry",
                                account.name, account.id
                            )))
                        }
                    }
                }
                None => None,
            };

            let id = match txn.host_ban(&host)? {
                Some(previous) => {
                    if let Some(owner) = previous.account_id {
                        ops.push(BatchOperation::delete(KeyPrefix::owner_key(owner, &host)));
                    }
                    if let Some(user) = &previous.attributed_user {
                        ops.push(BatchOperation::delete(KeyPrefix::user_key(user, &host)));
                    }
                    previous.id
                }
                None => txn.next_id(Sequence::Ban, ops)?,
            };

            let ban = Ban {
                id,
                host: host.clone(),
                raw_text: raw_text.to_string(),
                attributed_user,
                account_id,
            };

            ops.push(BatchOperation::put(
                KeyPrefix::ban_key(&host),
                txn.encode(&ban)?,
            ));
            if let Some(owner) = ban.account_id {
                ops.push(BatchOperation::put(
                    KeyPrefix::owner_key(owner, &host),
                    Vec::new(),
                ));
            }
            if let Some(user) = &ban.attributed_user {
                ops.push(BatchOperation::put(KeyPrefix::user_key(user, &host), Vec::new()));
            }
            Ok(ban)
        })?;

        tracing::warn!(
            host = %ban.host,
            attributed_user = ?ban.attributed_user,
            account = ?caused_by.map(|a| a.name.as_str()),
            "[bs-02] Ban recorded on {}",
            ban.host
        );
        Ok(ban)
    }
}

impl<KV, RS> BanRegistryApi for RegistryService<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    fn record_ban(
        &self,
        raw_text: &str,
        caused_by: Option<&Account>,
        egress_address: &str,
    ) -> Result<Ban, RegistryError> {
        let host = egress_host(egress_address)?;
        let attributed_user = extract_attributed_user(raw_text)?;
        self.store_ban(host, raw_text, attributed_user, caused_by)
    }

    fn record_ban_unattributed(
        &self,
        raw_text: &str,
        caused_by: Option<&Account>,
        egress_address: &str,
    ) -> Result<Ban, RegistryError> {
        let host = egress_host(egress_address)?;
        self.store_ban(host, raw_text, None, caused_by)
    }

    fn is_host_banned(&self, egress_address: &str) -> Result<Option<Ban>, RegistryError> {
        let host = egress_host(egress_address)?;
        let ban = self.read_txn(|txn| txn.host_ban(&host))?;
        tracing::debug!(host = %host, banned = ban.is_some(), "[bs-02] Host lookup");
        Ok(ban)
    }

    fn is_account_banned(&self, name: &str) -> Result<bool, RegistryError> {
        let banned = self.read_txn(|txn| txn.account_banned(name))?;
        tracing::debug!(account = %name, banned, "[bs-02] Account lookup");
        Ok(banned)
    }

    fn bans_for_account(&self, name: &str) -> Result<Vec<Ban>, RegistryError> {
        self.read_txn(|txn| match txn.load::<Account>(&KeyPrefix::account_key(name))? {
            Some(account) => txn.bans_by_index(&KeyPrefix::owner_prefix(account.id)),
            None => Ok(Vec::new()),
        })
    }

    fn bans_attributed_to(&self, name: &str) -> Result<Vec<Ban>, RegistryError> {
        self.read_txn(|txn| txn.bans_by_index(&KeyPrefix::user_prefix(name)))
    }
}
