//! Driven Ports (SPI - Outbound Dependencies)
//!
//! The coordinator does not decide slashability or compute signatures
//! itself. Both are delegated through these traits. Account resolution goes
//! through the storage adapter (`vs-02-slashing-storage`).

use signer_types::{AttestationData, BeaconBlockHeader, Domain, PublicKey, Root, Signature};
use thiserror::Error;
use vs_02_slashing_storage::ValidatorAccount;

use crate::domain::slashing::SlashingReason;

/// Slashing decision against the stored highest record.
///
/// `highest` is `None` when no record exists or the stored bytes were
/// unreadable. How to treat that is the protector's policy.
pub trait SlashingProtector: Send + Sync {
    fn check_attestation(
        &self,
        public_key: &PublicKey,
        highest: Option<&AttestationData>,
        candidate: &AttestationData,
    ) -> Result<(), SlashingReason>;

    fn check_proposal(
        &self,
        public_key: &PublicKey,
        highest: Option<&BeaconBlockHeader>,
        candidate: &BeaconBlockHeader,
    ) -> Result<(), SlashingReason>;
}

/// Errors from the external signer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// No secret key is held for the account
    #[error("No signing key for {0}")]
    UnknownKey(String),

    /// Key material was rejected
    #[error("Invalid key material: {0}")]
    InvalidKey(String),
}

/// Signature computation over `object_root` in `domain`.
pub trait Signer: Send + Sync {
    fn sign(
        &self,
        account: &ValidatorAccount,
        domain: &Domain,
        object_root: &Root,
    ) -> Result<Signature, SignerError>;
}
