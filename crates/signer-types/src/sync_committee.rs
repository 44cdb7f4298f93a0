//! # Sync Committee Types (Altair+)

use ssz_derive::{Decode, Encode};
use ssz_types::typenum::{U128, U512};
use tree_hash_derive::TreeHash;

use crate::primitives::{BitVector, BlsSignatureBytes, Root, Slot, ValidatorIndex};

pub type SyncCommitteeSize = U512;
pub type SyncSubcommitteeSize = U128;

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncAggregate {
    pub sync_committee_bits: BitVector<SyncCommitteeSize>,
    pub sync_committee_signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TreeHash)]
pub struct SyncAggregatorSelectionData {
    pub slot: Slot,
    pub subcommittee_index: u64,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SyncCommitteeContribution {
    pub slot: Slot,
    pub beacon_block_root: Root,
    pub subcommittee_index: u64,
    pub aggregation_bits: BitVector<SyncSubcommitteeSize>,
    pub signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct ContributionAndProof {
    pub aggregator_index: ValidatorIndex,
    pub contribution: SyncCommitteeContribution,
    pub selection_proof: BlsSignatureBytes,
}
