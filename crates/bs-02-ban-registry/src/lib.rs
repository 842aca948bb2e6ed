//! # Ban Registry (bs-02)
//!
//! Persistent record of bot accounts and the bans the game service has
//! issued against them or against the proxies they connect through.
//!
//! ## Architecture
//!
//! ```text
//! client layer ──upsert / record_ban──→ ┐
//!                                       ├──→ RegistryService ──batch──→ KeyValueStore
//! scheduler ─────check_safety─────────→ ┘    [one lock per operation]   (memory | RocksDB)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Unique Names | At most one account per name |
//! | 2 | One Ban Per Host | Recording a ban replaces the host's previous ban |
//! | 3 | Normalized Hosts | Bans are keyed by bare host, never by full proxy URL |
//! | 4 | Atomic Writes | An operation's writes commit together or not at all |
//! | 5 | Single Schema Init | The schema is created at most once per store |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, ban notice parsing, egress normalization, key layout
//! - `ports/` - Inbound APIs and outbound storage traits
//! - `adapters/` - In-memory and RocksDB stores, bincode serializer
//! - `service/` - Application service implementing the inbound APIs
//!
//! ## Usage
//!
//! ```
//! use bs_02_ban_registry::{BanRegistryApi, RegistryService, SafetyGateApi};
//!
//! let registry = RegistryService::in_memory();
//! registry.record_ban("1_3600_flooding (alice)", None, "socks5://9.9.9.9:1080")?;
//!
//! assert!(!registry.check_safety("alice", "5.6.7.8")?);
//! assert!(registry.check_safety("bob", "5.6.7.8")?);
//! # Ok::<(), bs_02_ban_registry::RegistryError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{BincodeRecordSerializer, ConfiguredStore, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbStore};
pub use domain::ban_notice::{extract_attributed_user, BanNotice};
pub use domain::config::{RegistryConfig, StorageBackend};
pub use domain::egress::{egress_host, normalize_egress};
pub use domain::entities::{Account, AccountId, Ban, BanId, CredentialSecret};
pub use domain::errors::{BanNoticeError, KVStoreError, RegistryError, SerializationError};
pub use domain::keys::{KeyPrefix, SCHEMA_VERSION};
pub use ports::inbound::{AccountStoreApi, BanRegistryApi, SafetyGateApi, SafetyVerdict};
pub use ports::outbound::{BatchOperation, KeyValueStore, RecordSerializer};
pub use service::RegistryService;
