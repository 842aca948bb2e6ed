//! # Registry Service
//!
//! The application service implementing the inbound ports.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `AccountStoreApi`, `BanRegistryApi` and `SafetyGateApi`
//! 2. Runs each public operation under the store lock (shared for reads,
//!    exclusive for writes) and commits its writes as one atomic batch
//! 3. Initialises the schema at most once per process
//! 4. Uses dependency injection for the store and serializer

mod accounts;
mod bans;
mod safety;


use crate::adapters::{BincodeRecordSerializer, ConfiguredStore, InMemoryKVStore};
use crate::domain::config::RegistryConfig;
use crate::domain::errors::{KVStoreError, RegistryError};
use crate::domain::keys::{KeyPrefix, Sequence, SCHEMA_VERSION};
use crate::ports::outbound::{BatchOperation, KeyValueStore, RecordSerializer};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Bot account and ban registry.
///
/// Share it between tasks behind an `Arc`; all methods take `&self`.
pub struct RegistryService<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    /// Key-value store, locked per operation.
    store: RwLock<KV>,
    /// Record serializer.
    serializer: RS,
    /// Set once the schema is known to exist.
    schema_ready: AtomicBool,
}

impl RegistryService<InMemoryKVStore, BincodeRecordSerializer> {
    /// Registry backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryKVStore::new(), BincodeRecordSerializer)
    }
}

impl RegistryService<ConfiguredStore, BincodeRecordSerializer> {
    /// Open the backend described by `config` and initialise its schema.
    pub fn open(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let service = Self::new(ConfiguredStore::open(config)?, BincodeRecordSerializer);
        service.initialize()?;
        Ok(service)
    }
}

impl<KV, RS> RegistryService<KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    /// Create a service over the given store. The schema is created on
    /// [`initialize`](Self::initialize) or on first use, whichever is first.
    pub fn new(store: KV, serializer: RS) -> Self {
        Self {
            store: RwLock::new(store),
            serializer,
            schema_ready: AtomicBool::new(false),
        }
    }

    /// Create the schema if the store has none. Safe to call repeatedly and
    /// from several threads; only the first call touches the store.
    ///
    /// # Errors
    ///
    /// - `SchemaMismatch` if the store holds another schema version
    /// - `Storage` on engine failure
    pub fn initialize(&self) -> Result<(), RegistryError> {
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }

        let mut store = self.store.write();
        if self.schema_ready.load(Ordering::Acquire) {
            return Ok(());
        }

        match store.get(&KeyPrefix::schema_key())? {
            Some(raw) => {
                let found = decode_u32(&raw)?;
                if found != SCHEMA_VERSION {
                    return Err(RegistryError::SchemaMismatch {
                        found,
                        expected: SCHEMA_VERSION,
                    });
                }
                tracing::debug!("[bs-02] Schema v{} already present", found);
            }
            None => {
                store.atomic_batch_write(vec![
                    BatchOperation::put(
                        KeyPrefix::sequence_key(Sequence::Account),
                        0u64.to_be_bytes().to_vec(),
                    ),
                    BatchOperation::put(
                        KeyPrefix::sequence_key(Sequence::Ban),
                        0u64.to_be_bytes().to_vec(),
                    ),
                    BatchOperation::put(
                        KeyPrefix::schema_key(),
                        SCHEMA_VERSION.to_be_bytes().to_vec(),
                    ),
                ])?;
                tracing::info!("[bs-02] Schema v{} created", SCHEMA_VERSION);
            }
        }

        self.schema_ready.store(true, Ordering::Release);
        Ok(())
    }

    /// Run `f` under the shared lock.
    fn read_txn<T>(
        &self,
        f: impl FnOnce(&Txn<'_, KV, RS>) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        self.initialize()?;
        let store = self.store.read();
        f(&Txn {
            store: &*store,
            serializer: &self.serializer,
        })
    }

    /// Run `f` under the exclusive lock, then commit the operations it
    /// queued as one batch. Nothing is written if `f` fails.
    fn write_txn<T>(
        &self,
        f: impl FnOnce(&Txn<'_, KV, RS>, &mut Vec<BatchOperation>) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        self.initialize()?;
        let mut store = self.store.write();
        let mut ops = Vec::new();
        let out = f(
            &Txn {
                store: &*store,
                serializer: &self.serializer,
            },
            &mut ops,
        )?;
        if !ops.is_empty() {
            store.atomic_batch_write(ops)?;
        }
        Ok(out)
    }
}

/// Read view of the store inside one locked operation.
struct Txn<'a, KV, RS> {
    store: &'a KV,
    serializer: &'a RS,
}

impl<KV, RS> Txn<'_, KV, RS>
where
    KV: KeyValueStore,
    RS: RecordSerializer,
{
    fn load<T: DeserializeOwned>(&self, key: &[u8]) -> Result<Option<T>, RegistryError> {
        match self.store.get(key)? {
            Some(data) => Ok(Some(self.serializer.deserialize(&data)?)),
            None => Ok(None),
        }
    }

    fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, RegistryError> {
        Ok(self.serializer.serialize(record)?)
    }

    /// Reserve the next id of `sequence`, queuing the counter update.
    fn next_id(
        &self,
        sequence: Sequence,
        ops: &mut Vec<BatchOperation>,
    ) -> Result<u64, RegistryError> {
        let key = KeyPrefix::sequence_key(sequence);
        let current = match self.store.get(&key)? {
            Some(raw) => decode_u64(&raw)?,
            None => 0,
        };
        let next = current + 1;
        ops.push(BatchOperation::put(key, next.to_be_bytes().to_vec()));
        Ok(next)
    }
}

fn decode_u64(raw: &[u8]) -> Result<u64, KVStoreError> {
    let bytes: [u8; 8] = raw.try_into().map_err(|_| KVStoreError::CorruptionError {
        message: format!("expected 8-byte counter, found {} bytes", raw.len()),
    })?;
    Ok(u64::from_be_bytes(bytes))
}

fn decode_u32(raw: &[u8]) -> Result<u32, KVStoreError> {
    let bytes: [u8; 4] = raw.try_into().map_err(|_| KVStoreError::CorruptionError {
        message: format!("expected 4-byte schema version, found {} bytes", raw.len()),
    })?;
    Ok(u32::from_be_bytes(bytes))
}
