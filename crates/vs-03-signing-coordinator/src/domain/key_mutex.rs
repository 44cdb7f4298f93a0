//! # Keyed Mutex Arena
//!
//! One in-process mutex per public key, created on first use and never
//! removed. This is the authoritative exclusion for a key's
//! lock → check → sign → persist sequence; the storage lock record rides
//! along for callers sharing the store from outside the process.
//!
//! Growth is bounded by the number of distinct keys ever requested.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use signer_types::PublicKey;

#[derive(Default)]
pub struct KeyedMutexArena {
    mutexes: Mutex<HashMap<PublicKey, Arc<Mutex<()>>>>,
}

impl KeyedMutexArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mutex for `public_key`, created if this is the first request.
    pub fn handle(&self, public_key: &PublicKey) -> Arc<Mutex<()>> {
        let mut mutexes = self.mutexes.lock();
        Arc::clone(mutexes.entry(*public_key).or_default())
    }
}

/// Try to lock `handle`: immediately when `wait` is `None`, else within `wait`.
pub fn try_lock(handle: &Mutex<()>, wait: Option<Duration>) -> Option<MutexGuard<'_, ()>> {
    match wait {
        None => handle.try_lock(),
        Some(timeout) => handle.try_lock_for(timeout),
    }
}
