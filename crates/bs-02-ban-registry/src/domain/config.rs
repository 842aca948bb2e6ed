//! Registry configuration.

use std::env;

/// Storage engine selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// Process-local map; contents are lost on exit.
    Memory,
    /// RocksDB at the given directory (requires the `rocksdb` feature).
    RocksDb { path: String },
}

/// Configuration for opening a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Which storage engine to open.
    pub backend: StorageBackend,
    /// fsync every write batch (RocksDB only).
    pub sync_writes: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            sync_writes: true,
        }
    }
}

impl RegistryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BS_STORAGE`: `memory` or `rocksdb` (default: memory)
    /// - `BS_DB_PATH`: RocksDB directory (default: ./data/bans)
    /// - `BS_SYNC_WRITES`: fsync each batch (default: true)
    pub fn from_env() -> Self {
        let backend = match env::var("BS_STORAGE")
            .map(|v| v.to_ascii_lowercase())
            .as_deref()
        {
            Ok("rocksdb") => StorageBackend::RocksDb {
                path: env::var("BS_DB_PATH").unwrap_or_else(|_| "./data/bans".to_string()),
            },
            _ => StorageBackend::Memory,
        };

        Self {
            backend,
            sync_writes: env::var("BS_SYNC_WRITES")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    /// RocksDB configuration at `path`.
    pub fn rocksdb(path: impl Into<String>) -> Self {
        Self {
            backend: StorageBackend::RocksDb { path: path.into() },
            ..Self::default()
        }
    }
}
