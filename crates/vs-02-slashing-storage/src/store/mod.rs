//! # Signer Store
//!
//! Maps wallet, account, history and lock records onto a [`KeyValueStore`].
//! All raw key access in the signer goes through this adapter.
//!
//! Operations are split across:
//! - `wallet.rs`: wallet and account records
//! - `history.rs`: highest attestation / proposal per key
//! - `lock.rs`: per-key signing lock

mod history;
mod lock;
mod wallet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::keys::KeySpace;
use crate::ports::outbound::KeyValueStore;

/// Storage adapter over one namespace of a key-value store.
pub struct SignerStore<S> {
    kv: S,
    keys: KeySpace,
}

impl<S: KeyValueStore> SignerStore<S> {
    /// Adapter over the root namespace.
    pub fn new(kv: S) -> Self {
        Self::with_namespace(kv, "")
    }

    pub fn with_namespace(kv: S, namespace: &str) -> Self {
        Self {
            kv,
            keys: KeySpace::new(namespace),
        }
    }

    pub fn keys(&self) -> &KeySpace {
        &self.keys
    }

    pub fn backend(&self) -> &S {
        &self.kv
    }

    // =========================================================================
    // Raw record helpers
    // =========================================================================

    fn read_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        record: &'static str,
        key: &str,
    ) -> StorageResult<Option<T>> {
        let Some(bytes) = self.kv.get(key).map_err(StorageError::backend(operation))? else {
            return Ok(None);
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::Serialization {
                record,
                message: e.to_string(),
            })
    }

    fn write_json<T: Serialize>(
        &self,
        operation: &'static str,
        record: &'static str,
        key: &str,
        value: &T,
    ) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value).map_err(|e| StorageError::Serialization {
            record,
            message: e.to_string(),
        })?;
        self.kv.put(key, &bytes).map_err(StorageError::backend(operation))
    }

    fn delete_key(&self, operation: &'static str, key: &str) -> StorageResult<()> {
        self.kv.delete(key).map_err(StorageError::backend(operation))
    }

    /// Delete every key under `prefix`, returning how many were removed.
    fn delete_prefix(&self, operation: &'static str, prefix: &str) -> StorageResult<usize> {
        let keys = self.kv.list(prefix).map_err(StorageError::backend(operation))?;
        for key in &keys {
            self.delete_key(operation, key)?;
        }
        Ok(keys.len())
    }
}
