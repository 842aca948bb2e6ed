//! # Persistence Flows
//!
//! Registry contents survive a close and reopen of the RocksDB backend.

#[cfg(all(test, feature = "rocksdb"))]
mod tests {
    use bs_02_ban_registry::{
        AccountStoreApi, BanRegistryApi, CredentialSecret, RegistryConfig, RegistryService,
        SafetyGateApi,
    };
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> RegistryConfig {
        RegistryConfig::rocksdb(dir.path().to_string_lossy().into_owned())
    }

    #[test]
    fn test_bans_survive_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let registry = RegistryService::open(&config_in(&dir)).unwrap();
            let bot = registry
                .upsert_account("bot1", CredentialSecret::from("pw"), 1)
                .unwrap();
            registry
                .record_ban("1_60_spam (alice)", Some(&bot), "9.9.9.9")
                .unwrap();
        }

        let registry = RegistryService::open(&config_in(&dir)).unwrap();
        assert!(registry.find_account("bot1").unwrap().is_some());
        assert!(registry.is_host_banned("9.9.9.9").unwrap().is_some());
        assert!(!registry.check_safety("alice", "5.6.7.8").unwrap());
        assert!(!registry.check_safety("bot1", "5.6.7.8").unwrap());
    }

    #[test]
    fn test_ids_continue_after_reopen() {
        let dir = TempDir::new().unwrap();

        let first = {
            let registry = RegistryService::open(&config_in(&dir)).unwrap();
            registry
                .upsert_account("a", CredentialSecret::from("pw"), 1)
                .unwrap()
        };

        let registry = RegistryService::open(&config_in(&dir)).unwrap();
        let second = registry
            .upsert_account("b", CredentialSecret::from("pw"), 2)
            .unwrap();
        assert!(second.id > first.id);
    }
}
