//! # Attestation Types
//!
//! Phase 0 attestation containers. `AttestationData` is the unit the slashing
//! protector reasons about; the rest wrap it for aggregation and slashings.

use ssz_derive::{Decode, Encode};
use ssz_types::typenum::U2048;
use tree_hash_derive::TreeHash;

use crate::primitives::{
    BitList, BlsSignatureBytes, CommitteeIndex, Epoch, Root, Slot, ValidatorIndex, VariableList,
};

/// Maximum validators per committee.
pub type MaxValidatorsPerCommittee = U2048;

/// Epoch boundary checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TreeHash)]
pub struct Checkpoint {
    pub epoch: Epoch,
    pub root: Root,
}

/// Attestation content describing the validator's observed chain view.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TreeHash)]
pub struct AttestationData {
    pub slot: Slot,
    /// Committee index.
    pub index: CommitteeIndex,
    /// LMD GHOST vote.
    pub beacon_block_root: Root,
    /// FFG source.
    pub source: Checkpoint,
    /// FFG target.
    pub target: Checkpoint,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct Attestation {
    pub aggregation_bits: BitList<MaxValidatorsPerCommittee>,
    pub data: AttestationData,
    pub signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct IndexedAttestation {
    pub attesting_indices: VariableList<ValidatorIndex, MaxValidatorsPerCommittee>,
    pub data: AttestationData,
    pub signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct AttesterSlashing {
    pub attestation_1: IndexedAttestation,
    pub attestation_2: IndexedAttestation,
}

/// Aggregate attestation with the aggregator's selection proof.
#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct AggregateAndProof {
    pub aggregator_index: ValidatorIndex,
    pub aggregate: Attestation,
    pub selection_proof: BlsSignatureBytes,
}
