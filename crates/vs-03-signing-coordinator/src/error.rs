//! Error types for the signing coordinator
//!
//! Callers see a small, stable set of kinds through [`SigningError::kind`];
//! the variants keep the failure site for logs.

use thiserror::Error;
use vs_01_envelope_codec::CodecError;
use vs_02_slashing_storage::StorageError;

use crate::domain::slashing::SlashingReason;
use crate::ports::outbound::SignerError;

/// Caller-visible error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Undecodable or inconsistent request; not retried
    Malformed,
    /// Unknown account or absent wallet
    NotFound,
    /// Protector refused; carries a [`SlashingReason`]
    Slashable,
    /// Key already in flight; retryable
    Locked,
    /// Backing store failed
    Storage,
    /// External signer failed
    Signer,
}

/// Signing coordinator errors
#[derive(Debug, Error)]
pub enum SigningError {
    /// Envelope bytes did not decode
    #[error("Malformed request: {0}")]
    Decode(#[from] CodecError),

    /// Envelope decoded but cannot be served
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Wallet not found")]
    WalletNotFound,

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Slashing protector refused the request
    #[error("{0}")]
    Slashable(#[from] SlashingReason),

    #[error("Signing lock held for {0}")]
    Locked(String),

    #[error("Storage failure during {operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StorageError,
    },

    #[error("Signer failed: {0}")]
    Signer(#[from] SignerError),
}

impl SigningError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(_) | Self::InvalidRequest(_) => ErrorKind::Malformed,
            Self::WalletNotFound | Self::AccountNotFound(_) => ErrorKind::NotFound,
            Self::Slashable(_) => ErrorKind::Slashable,
            Self::Locked(_) => ErrorKind::Locked,
            Self::Storage { .. } => ErrorKind::Storage,
            Self::Signer(_) => ErrorKind::Signer,
        }
    }

    /// The protector's reason, when this is a slashing rejection.
    pub fn slashing_reason(&self) -> Option<SlashingReason> {
        match self {
            Self::Slashable(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Map a storage error raised during `operation`, keeping not-found and
    /// lock outcomes as their own kinds.
    pub(crate) fn storage(operation: &'static str) -> impl FnOnce(StorageError) -> Self {
        move |source| match source {
            StorageError::WalletNotFound => Self::WalletNotFound,
            StorageError::AccountNotFound(key) => Self::AccountNotFound(key),
            StorageError::Locked { public_key } => Self::Locked(public_key),
            source => Self::Storage { operation, source },
        }
    }
}

/// Result type for signing operations
pub type SigningResult<T> = Result<T, SigningError>;
