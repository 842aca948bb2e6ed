//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: In-memory and RocksDB key-value stores
//! - `serializer`: bincode record encoding

pub mod serializer;
pub mod storage;

pub use serializer::BincodeRecordSerializer;
pub use storage::{ConfiguredStore, InMemoryKVStore};
#[cfg(feature = "rocksdb")]
pub use storage::{RocksDbConfig, RocksDbStore};
