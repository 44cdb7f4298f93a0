//! # Block Operations
//!
//! Operations carried inside block bodies plus the stand-alone voluntary exit.

use ssz_derive::{Decode, Encode};
use ssz_types::typenum::U33;
use tree_hash_derive::TreeHash;

use crate::primitives::{
    BlsPublicKeyBytes, BlsSignatureBytes, Epoch, ExecutionAddress, FixedVector, Gwei, Root, Slot,
    ValidatorIndex,
};

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TreeHash)]
pub struct Eth1Data {
    pub deposit_root: Root,
    pub deposit_count: u64,
    pub block_hash: Root,
}

/// Block summary: the record kept as the highest proposal per key.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TreeHash)]
pub struct BeaconBlockHeader {
    pub slot: Slot,
    pub proposer_index: ValidatorIndex,
    pub parent_root: Root,
    pub state_root: Root,
    pub body_root: Root,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SignedBeaconBlockHeader {
    pub message: BeaconBlockHeader,
    pub signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct ProposerSlashing {
    pub signed_header_1: SignedBeaconBlockHeader,
    pub signed_header_2: SignedBeaconBlockHeader,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct DepositData {
    pub pubkey: BlsPublicKeyBytes,
    pub withdrawal_credentials: Root,
    pub amount: Gwei,
    pub signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct Deposit {
    /// Merkle branch of the deposit tree (depth 32 plus length mix-in).
    pub proof: FixedVector<Root, U33>,
    pub data: DepositData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TreeHash)]
pub struct VoluntaryExit {
    pub epoch: Epoch,
    pub validator_index: ValidatorIndex,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SignedVoluntaryExit {
    pub message: VoluntaryExit,
    pub signature: BlsSignatureBytes,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BlsToExecutionChange {
    pub validator_index: ValidatorIndex,
    pub from_bls_pubkey: BlsPublicKeyBytes,
    pub to_execution_address: ExecutionAddress,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SignedBlsToExecutionChange {
    pub message: BlsToExecutionChange,
    pub signature: BlsSignatureBytes,
}
