//! Storage Adapters
//!
//! Implementations of the `KeyValueStore` trait.

mod memory;
#[cfg(feature = "rocksdb")]
mod rocksdb;

pub use memory::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use self::rocksdb::{RocksDbConfig, RocksDbStore};

use crate::domain::config::{RegistryConfig, StorageBackend};
use crate::domain::errors::{KVStoreError, RegistryError};
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};

/// A store chosen at runtime from [`RegistryConfig`].
pub enum ConfiguredStore {
    /// In-memory store.
    Memory(InMemoryKVStore),
    /// RocksDB store.
    #[cfg(feature = "rocksdb")]
    RocksDb(RocksDbStore),
}

impl ConfiguredStore {
    /// Open the backend named by `config`.
    ///
    /// # Errors
    ///
    /// - `Config` if RocksDB is requested but the feature is disabled
    /// - `Storage` if the engine fails to open
    pub fn open(config: &RegistryConfig) -> Result<Self, RegistryError> {
        match &config.backend {
            StorageBackend::Memory => Ok(Self::Memory(InMemoryKVStore::new())),
            #[cfg(feature = "rocksdb")]
            StorageBackend::RocksDb { path } => {
                let rocks = RocksDbConfig {
                    path: path.clone(),
                    sync_writes: config.sync_writes,
                    ..RocksDbConfig::default()
                };
                Ok(Self::RocksDb(RocksDbStore::open(rocks)?))
            }
            #[cfg(not(feature = "rocksdb"))]
            StorageBackend::RocksDb { path } => Err(RegistryError::Config {
                reason: format!(
                    "RocksDB backend at {path} requested but the `rocksdb` feature is disabled"
                ),
            }),
        }
    }

    fn inner(&self) -> &dyn KeyValueStore {
        match self {
            Self::Memory(store) => store,
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(store) => store,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn KeyValueStore {
        match self {
            Self::Memory(store) => store,
            #[cfg(feature = "rocksdb")]
            Self::RocksDb(store) => store,
        }
    }
}

impl KeyValueStore for ConfiguredStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.inner().get(key)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        self.inner_mut().atomic_batch_write(operations)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        self.inner().prefix_scan(prefix)
    }
}
