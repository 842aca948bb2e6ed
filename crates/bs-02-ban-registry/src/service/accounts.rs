//! # Account Store Implementation

use super::*;
use crate::domain::entities::{Account, CredentialSecret};
use crate::ports::inbound::AccountStoreApi;

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if name.is_empty() {
        return Err(RegistryError::validation("account name must not be empty"));
    }
    Ok(())
}

impl<KV, RS> AccountStoreApi for RegistryService<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    fn upsert_account(
        &self,
        name: &str,
        credential_secret: CredentialSecret,
        external_id: u64,
    ) -> Result<Account, RegistryError> {
        validate_name(name)?;

        let account = self.write_txn(|txn, ops| {
            let key = KeyPrefix::account_key(name);
            let existing: Option<Account> = txn.load(&key)?;

            let id = match &existing {
                Some(account) => account.id,
                None => txn.next_id(Sequence::Account, ops)?,
            };
            let account = Account {
                id,
                name: name.to_string(),
                credential_secret: Some(credential_secret),
                external_id: Some(external_id),
            };

            if existing.as_ref() != Some(&account) {
                ops.push(BatchOperation::put(key, txn.encode(&account)?));
            }
            Ok(account)
        })?;

        tracing::info!(
            account = %account.name,
            external_id,
            "[bs-02] Account {} stored (id {})",
            account.name,
            account.id
        );
        Ok(account)
    }

    fn register_placeholder(&self, name: &str) -> Result<Account, RegistryError> {
        validate_name(name)?;

        self.write_txn(|txn, ops| {
            let key = KeyPrefix::account_key(name);
            if let Some(existing) = txn.load::<Account>(&key)? {
                return Ok(existing);
            }

            let account = Account {
                id: txn.next_id(Sequence::Account, ops)?,
                name: name.to_string(),
                credential_secret: None,
                external_id: None,
            };
            ops.push(BatchOperation::put(key, txn.encode(&account)?));
            tracing::debug!(account = %name, "[bs-02] Placeholder account reserved");
            Ok(account)
        })
    }

    fn find_account(&self, name: &str) -> Result<Option<Account>, RegistryError> {
        self.read_txn(|txn| txn.load(&KeyPrefix::account_key(name)))
    }
}
