//! # Slashing History
//!
//! One highest attestation and one highest proposal per public key, each
//! stored as SSZ bytes and replaced wholesale on every save.
//!
//! Reads treat undecodable bytes the same as a missing record: both leave
//! the protector with no basis for comparison.

use signer_types::primitives::{Decode, Encode};
use signer_types::{AttestationData, BeaconBlockHeader, PublicKey};
use tracing::warn;

use super::SignerStore;
use crate::domain::errors::{StorageError, StorageResult};
use crate::ports::outbound::KeyValueStore;

impl<S: KeyValueStore> SignerStore<S> {
    pub fn save_highest_attestation(
        &self,
        public_key: &PublicKey,
        record: &AttestationData,
    ) -> StorageResult<()> {
        if public_key.is_zero() {
            return Err(StorageError::InvalidArgument("public key"));
        }
        self.kv
            .put(&self.keys.attestation(public_key), &record.as_ssz_bytes())
            .map_err(StorageError::backend("save_highest_attestation"))
    }

    pub fn retrieve_highest_attestation(
        &self,
        public_key: &PublicKey,
    ) -> StorageResult<Option<AttestationData>> {
        self.retrieve_ssz("retrieve_highest_attestation", &self.keys.attestation(public_key))
    }

    pub fn save_highest_proposal(
        &self,
        public_key: &PublicKey,
        record: &BeaconBlockHeader,
    ) -> StorageResult<()> {
        if public_key.is_zero() {
            return Err(StorageError::InvalidArgument("public key"));
        }
        self.kv
            .put(&self.keys.proposal(public_key), &record.as_ssz_bytes())
            .map_err(StorageError::backend("save_highest_proposal"))
    }

    pub fn retrieve_highest_proposal(
        &self,
        public_key: &PublicKey,
    ) -> StorageResult<Option<BeaconBlockHeader>> {
        self.retrieve_ssz("retrieve_highest_proposal", &self.keys.proposal(public_key))
    }

    /// Drop both history namespaces. Returns the number of records removed.
    pub fn clear_histories(&self) -> StorageResult<usize> {
        let attestations =
            self.delete_prefix("clear_histories", &self.keys.attestations_prefix())?;
        let proposals = self.delete_prefix("clear_histories", &self.keys.proposals_prefix())?;
        Ok(attestations + proposals)
    }

    fn retrieve_ssz<T: Decode>(
        &self,
        operation: &'static str,
        key: &str,
    ) -> StorageResult<Option<T>> {
        let Some(bytes) = self.kv.get(key).map_err(StorageError::backend(operation))? else {
            return Ok(None);
        };
        match T::from_ssz_bytes(&bytes) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("[vs-02] Ignoring undecodable history record at {}: {:?}", key, e);
                Ok(None)
            }
        }
    }
}
