//! # Safety Gate Implementation

use super::*;
use crate::domain::egress::egress_host;
use crate::ports::inbound::{SafetyGateApi, SafetyVerdict};

impl<KV, RS> SafetyGateApi for RegistryService<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    fn assess(&self, name: &str, egress_address: &str) -> Result<SafetyVerdict, RegistryError> {
        let host = egress_host(egress_address)?;

        let verdict = self.read_txn(|txn| {
            // Host first: a single point lookup, no index scan.
            if let Some(ban) = txn.host_ban(&host)? {
                return Ok(SafetyVerdict::HostBanned(ban));
            }
            if txn.account_banned(name)? {
                return Ok(SafetyVerdict::AccountBanned);
            }
            Ok(SafetyVerdict::Safe)
        })?;

        if !verdict.is_safe() {
            tracing::info!(
                account = %name,
                host = %host,
                verdict = ?verdict,
                "[bs-02] Identity/egress pair rejected"
            );
        }
        Ok(verdict)
    }
}
