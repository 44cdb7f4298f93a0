//! Error types for the storage layer

use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KVStoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },
    /// Backend refused the operation (closed, read-only, unreachable).
    #[error("KV store unavailable: {message}")]
    Unavailable { message: String },
}

/// Storage adapter errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No wallet record exists in the namespace
    #[error("Wallet not found")]
    WalletNotFound,

    /// No account matches the requested public key or id
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Signing lock is already held for this key
    #[error("Signing lock held for {public_key}")]
    Locked { public_key: String },

    /// Required argument was empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Record could not be encoded or decoded
    #[error("Serialization failed for {record}: {message}")]
    Serialization { record: &'static str, message: String },

    /// Backing store failed
    #[error("Storage backend failed during {operation}: {source}")]
    Backend {
        operation: &'static str,
        #[source]
        source: KVStoreError,
    },
}

impl StorageError {
    pub(crate) fn backend(operation: &'static str) -> impl FnOnce(KVStoreError) -> Self {
        move |source| Self::Backend { operation, source }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
