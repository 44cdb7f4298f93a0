//! # vs-02-slashing-storage
//!
//! Slashing-history storage layer for the validator signer.
//!
//! ## Overview
//!
//! This crate provides:
//! - **Key-Value Port**: flat get/put/delete/list store, no transactions
//! - **Storage Adapter**: wallet and account records mapped onto that store
//! - **Slashing History**: one highest attestation and proposal per key
//! - **Signing Lock**: best-effort try-lock record per key
//! - **Bulk Import**: replace or merge a wallet from a snapshot
//!
//! ## Architecture
//!
//! ```text
//! Signing Coordinator (3) ──→ SignerStore ──→ KeyValueStore
//!                                 │               ├── InMemoryKVStore
//!          replace / merge ───────┘               └── RocksDbStore (feature "rocksdb")
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use vs_02_slashing_storage::{InMemoryKVStore, SignerStore};
//!
//! let store = SignerStore::new(InMemoryKVStore::new());
//! store.acquire_lock(&public_key)?;
//! let highest = store.retrieve_highest_attestation(&public_key)?;
//! store.release_lock(&public_key)?;
//! ```

pub mod adapters;
pub mod domain;
pub mod import;
pub mod ports;
pub mod store;

pub use adapters::InMemoryKVStore;
#[cfg(feature = "rocksdb")]
pub use adapters::{RocksDbConfig, RocksDbStore};
pub use domain::{
    AccountSnapshot, InMemorySnapshot, KVStoreError, KeySpace, StorageError, StorageResult,
    ValidatorAccount, Wallet,
};
pub use import::{merge_from_snapshot, replace_from_snapshot, ImportReport};
pub use ports::outbound::KeyValueStore;
pub use store::SignerStore;
