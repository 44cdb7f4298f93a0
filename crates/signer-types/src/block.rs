//! # Beacon Block Types
//!
//! Four schema generations of the beacon block (Phase 0, Altair, Bellatrix,
//! Capella) and two of the blinded block (Bellatrix, Capella). Every block
//! shares the same header fields; only the body evolves.

use std::fmt;

use ssz_derive::{Decode, Encode};
use ssz_types::typenum::{U128, U16, U2};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

use crate::attestation::{Attestation, AttesterSlashing};
use crate::execution::{
    ExecutionPayload, ExecutionPayloadCapella, ExecutionPayloadHeader,
    ExecutionPayloadHeaderCapella,
};
use crate::operations::{
    BeaconBlockHeader, Deposit, Eth1Data, ProposerSlashing, SignedBlsToExecutionChange,
    SignedVoluntaryExit,
};
use crate::primitives::{BlsSignatureBytes, Root, Slot, ValidatorIndex, VariableList};
use crate::sync_committee::SyncAggregate;

pub type ProposerSlashings = VariableList<ProposerSlashing, U16>;
pub type AttesterSlashings = VariableList<AttesterSlashing, U2>;
pub type Attestations = VariableList<Attestation, U128>;
pub type Deposits = VariableList<Deposit, U16>;
pub type VoluntaryExits = VariableList<SignedVoluntaryExit, U16>;
pub type BlsToExecutionChanges = VariableList<SignedBlsToExecutionChange, U16>;

/// Schema generation of a versioned payload. The numeric value is the
/// `payloadVersion` carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataVersion {
    Phase0 = 0,
    Altair = 1,
    Bellatrix = 2,
    Capella = 3,
}

impl DataVersion {
    pub fn as_u64(self) -> u64 {
        self as u64
    }

    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::Phase0),
            1 => Some(Self::Altair),
            2 => Some(Self::Bellatrix),
            3 => Some(Self::Capella),
            _ => None,
        }
    }
}

impl fmt::Display for DataVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phase0 => "phase0",
            Self::Altair => "altair",
            Self::Bellatrix => "bellatrix",
            Self::Capella => "capella",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyPhase0 {
    pub randao_reveal: BlsSignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: ProposerSlashings,
    pub attester_slashings: AttesterSlashings,
    pub attestations: Attestations,
    pub deposits: Deposits,
    pub voluntary_exits: VoluntaryExits,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyAltair {
    pub randao_reveal: BlsSignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: ProposerSlashings,
    pub attester_slashings: AttesterSlashings,
    pub attestations: Attestations,
    pub deposits: Deposits,
    pub voluntary_exits: VoluntaryExits,
    pub sync_aggregate: SyncAggregate,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyBellatrix {
    pub randao_reveal: BlsSignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: ProposerSlashings,
    pub attester_slashings: AttesterSlashings,
    pub attestations: Attestations,
    pub deposits: Deposits,
    pub voluntary_exits: VoluntaryExits,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload: ExecutionPayload,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BeaconBlockBodyCapella {
    pub randao_reveal: BlsSignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: ProposerSlashings,
    pub attester_slashings: AttesterSlashings,
    pub attestations: Attestations,
    pub deposits: Deposits,
    pub voluntary_exits: VoluntaryExits,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload: ExecutionPayloadCapella,
    pub bls_to_execution_changes: BlsToExecutionChanges,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BlindedBeaconBlockBodyBellatrix {
    pub randao_reveal: BlsSignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: ProposerSlashings,
    pub attester_slashings: AttesterSlashings,
    pub attestations: Attestations,
    pub deposits: Deposits,
    pub voluntary_exits: VoluntaryExits,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload_header: ExecutionPayloadHeader,
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct BlindedBeaconBlockBodyCapella {
    pub randao_reveal: BlsSignatureBytes,
    pub eth1_data: Eth1Data,
    pub graffiti: Root,
    pub proposer_slashings: ProposerSlashings,
    pub attester_slashings: AttesterSlashings,
    pub attestations: Attestations,
    pub deposits: Deposits,
    pub voluntary_exits: VoluntaryExits,
    pub sync_aggregate: SyncAggregate,
    pub execution_payload_header: ExecutionPayloadHeaderCapella,
    pub bls_to_execution_changes: BlsToExecutionChanges,
}

macro_rules! beacon_block {
    ($(#[$meta:meta])* $name:ident, $body:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
        pub struct $name {
            pub slot: Slot,
            pub proposer_index: ValidatorIndex,
            pub parent_root: Root,
            pub state_root: Root,
            pub body: $body,
        }

        impl $name {
            /// Header of this block. Its hash tree root equals the block's.
            pub fn header(&self) -> BeaconBlockHeader {
                BeaconBlockHeader {
                    slot: self.slot,
                    proposer_index: self.proposer_index,
                    parent_root: self.parent_root,
                    state_root: self.state_root,
                    body_root: self.body.tree_hash_root(),
                }
            }
        }
    };
}

beacon_block!(BeaconBlockPhase0, BeaconBlockBodyPhase0);
beacon_block!(BeaconBlockAltair, BeaconBlockBodyAltair);
beacon_block!(BeaconBlockBellatrix, BeaconBlockBodyBellatrix);
beacon_block!(BeaconBlockCapella, BeaconBlockBodyCapella);
beacon_block!(BlindedBeaconBlockBellatrix, BlindedBeaconBlockBodyBellatrix);
beacon_block!(BlindedBeaconBlockCapella, BlindedBeaconBlockBodyCapella);

/// A beacon block tagged with its schema generation.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedBeaconBlock {
    Phase0(BeaconBlockPhase0),
    Altair(BeaconBlockAltair),
    Bellatrix(BeaconBlockBellatrix),
    Capella(BeaconBlockCapella),
}

impl VersionedBeaconBlock {
    pub fn version(&self) -> DataVersion {
        match self {
            Self::Phase0(_) => DataVersion::Phase0,
            Self::Altair(_) => DataVersion::Altair,
            Self::Bellatrix(_) => DataVersion::Bellatrix,
            Self::Capella(_) => DataVersion::Capella,
        }
    }

    pub fn header(&self) -> BeaconBlockHeader {
        match self {
            Self::Phase0(block) => block.header(),
            Self::Altair(block) => block.header(),
            Self::Bellatrix(block) => block.header(),
            Self::Capella(block) => block.header(),
        }
    }
}

/// A blinded beacon block tagged with its schema generation.
#[derive(Debug, Clone, PartialEq)]
pub enum VersionedBlindedBeaconBlock {
    Bellatrix(BlindedBeaconBlockBellatrix),
    Capella(BlindedBeaconBlockCapella),
}

impl VersionedBlindedBeaconBlock {
    pub fn version(&self) -> DataVersion {
        match self {
            Self::Bellatrix(_) => DataVersion::Bellatrix,
            Self::Capella(_) => DataVersion::Capella,
        }
    }

    pub fn header(&self) -> BeaconBlockHeader {
        match self {
            Self::Bellatrix(block) => block.header(),
            Self::Capella(block) => block.header(),
        }
    }
}
