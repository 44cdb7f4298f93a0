//! # Per-Key Signing Lock
//!
//! A lock is a record at `lock/<hex pubkey>`: present means held. The value
//! is the holder's process id, for operators clearing a stale lock.
//!
//! ## Limitation
//!
//! Acquire is check-then-write over two store calls. Two processes sharing
//! one store can both observe the key absent and both acquire. Within one
//! process the coordinator's per-key mutex serializes callers, which closes
//! the window. There is no expiry: a crash while held leaves the key locked
//! until the record is deleted.

use signer_types::PublicKey;
use tracing::debug;

use super::SignerStore;
use crate::domain::errors::{StorageError, StorageResult};
use crate::ports::outbound::KeyValueStore;

impl<S: KeyValueStore> SignerStore<S> {
    /// Take the lock for `public_key`, failing immediately if it is held.
    pub fn acquire_lock(&self, public_key: &PublicKey) -> StorageResult<()> {
        let key = self.keys.lock(public_key);
        let held = self
            .kv
            .get(&key)
            .map_err(StorageError::backend("acquire_lock"))?
            .is_some();
        if held {
            return Err(StorageError::Locked {
                public_key: public_key.to_hex(),
            });
        }

        let holder = std::process::id().to_string();
        self.kv
            .put(&key, holder.as_bytes())
            .map_err(StorageError::backend("acquire_lock"))?;
        debug!("[vs-02] Acquired signing lock for {}", public_key);
        Ok(())
    }

    /// Drop the lock for `public_key`. Releasing a free lock is a no-op.
    pub fn release_lock(&self, public_key: &PublicKey) -> StorageResult<()> {
        self.delete_key("release_lock", &self.keys.lock(public_key))?;
        debug!("[vs-02] Released signing lock for {}", public_key);
        Ok(())
    }

    pub fn is_locked(&self, public_key: &PublicKey) -> StorageResult<bool> {
        Ok(self
            .kv
            .get(&self.keys.lock(public_key))
            .map_err(StorageError::backend("is_locked"))?
            .is_some())
    }
}
