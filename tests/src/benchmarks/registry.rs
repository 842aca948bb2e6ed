//! # Registry Workloads
//!
//! Populated registries for lookup benchmarks:
//! - Thousands of accounts, each with a few owned bans
//! - Attribution-only bans for names never registered

use bs_02_ban_registry::{
    AccountStoreApi, BanRegistryApi, CredentialSecret, InMemoryKVStore, BincodeRecordSerializer,
    RegistryService,
};
use rand::Rng;

/// Registry service over the in-memory store.
pub type MemoryRegistry = RegistryService<InMemoryKVStore, BincodeRecordSerializer>;

/// Random dotted-quad host.
pub fn random_host<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..=223u8),
        rng.gen::<u8>(),
        rng.gen::<u8>(),
        rng.gen_range(1..=254u8)
    )
}

/// Registry holding `accounts` accounts named `bot{i}`, each banned on
/// `bans_per_account` random hosts, plus as many attribution-only bans.
///
/// # Panics
///
/// Panics if any record fails, so a benchmark never runs on a short store.
pub fn populated_registry(accounts: usize, bans_per_account: usize) -> MemoryRegistry {
    let registry = RegistryService::in_memory();
    let mut rng = rand::thread_rng();

    for i in 0..accounts {
        let name = format!("bot{i}");
        let account = registry
            .upsert_account(&name, CredentialSecret::from("pw"), i as u64)
            .expect("in-memory upsert failed");
        for _ in 0..bans_per_account {
            let host = random_host(&mut rng);
            registry
                .record_ban("1_3600_flooding", Some(&account), &host)
                .expect("in-memory owned ban failed");
            let host = random_host(&mut rng);
            registry
                .record_ban(&format!("1_3600_spam (ghost{i})"), None, &host)
                .expect("in-memory attributed ban failed");
        }
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_host_is_bannable() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let host = random_host(&mut rng);
            assert_eq!(bs_02_ban_registry::egress_host(&host).unwrap(), host);
        }
    }

    #[test]
    fn test_populated_registry_marks_every_bot() {
        let registry = populated_registry(20, 2);
        for i in 0..20 {
            assert!(registry.is_account_banned(&format!("bot{i}")).unwrap());
            assert!(registry.is_account_banned(&format!("ghost{i}")).unwrap());
        }
        assert!(!registry.is_account_banned("fresh").unwrap());
    }

    #[test]
    fn test_populated_registry_is_fully_populated() {
        let registry = populated_registry(10, 3);
        for i in 0..10 {
            assert_eq!(registry.bans_for_account(&format!("bot{i}")).unwrap().len(), 3);
            assert_eq!(registry.bans_attributed_to(&format!("ghost{i}")).unwrap().len(), 3);
        }
    }
}
