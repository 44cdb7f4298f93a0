//! # Outbound Ports (Driven Ports)
//!
//! The flat key-value store this crate maps domain records onto.
//!
//! Production: `RocksDbStore` (`adapters/rocksdb.rs`, feature `rocksdb`)
//! Testing: `InMemoryKVStore` (`adapters/memory.rs`)

use std::sync::Arc;

use crate::domain::errors::KVStoreError;

/// Abstract interface for a namespaced key-value store.
///
/// Strong read-after-write consistency is assumed. There are no multi-key
/// transactions and no compare-and-swap. Methods take `&self`; implementations
/// provide their own interior synchronization.
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError>;

    /// Put a single key-value pair, replacing any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), KVStoreError>;

    /// Delete a key. Deleting an absent key succeeds.
    fn delete(&self, key: &str) -> Result<(), KVStoreError>;

    /// Keys starting with `prefix`, in lexicographic order.
    fn list(&self, prefix: &str) -> Result<Vec<String>, KVStoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
        (**self).put(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), KVStoreError> {
        (**self).delete(key)
    }

    fn list(&self, prefix: &str) -> Result<Vec<String>, KVStoreError> {
        (**self).list(prefix)
    }
}
