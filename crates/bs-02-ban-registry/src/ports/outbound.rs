//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the registry service.
//!
//! These are the interfaces this library requires the host application to implement.

use crate::domain::errors::{KVStoreError, SerializationError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Result type for prefix scans (key-value pairs).
pub type ScanResult = Vec<(Vec<u8>, Vec<u8>)>;

/// Abstract interface for key-value database operations.
///
/// Production: `RocksDbStore` (feature `rocksdb`)
/// Testing: `InMemoryKVStore`
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations in the batch succeed, or NONE are applied.
    /// Operations apply in order, so a later `Put` on a key deleted earlier
    /// in the same batch wins.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KVStoreError>;

    /// Return every pair whose key starts with `prefix`, in key order.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<ScanResult, KVStoreError>;
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Delete a key.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }

    /// The key this operation touches.
    pub fn key(&self) -> &[u8] {
        match self {
            BatchOperation::Put { key, .. } | BatchOperation::Delete { key } => key,
        }
    }
}

/// Abstract interface for record serialization.
pub trait RecordSerializer: Send + Sync {
    /// Serialize a record to bytes.
    fn serialize<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize bytes to a record.
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, SerializationError>;
}
