//! Domain layer: record types, key layout and errors.

pub mod errors;
pub mod keys;
pub mod records;
pub mod snapshot;

pub use errors::{KVStoreError, StorageError, StorageResult};
pub use keys::KeySpace;
pub use records::{ValidatorAccount, Wallet};
pub use snapshot::{AccountSnapshot, InMemorySnapshot};
