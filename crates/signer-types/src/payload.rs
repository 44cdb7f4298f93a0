//! # Sign Payloads
//!
//! The polymorphic body of a sign request. Each variant is one kind of
//! consensus message a validator may be asked to sign.

use std::fmt;
use std::str::FromStr;

use ssz_derive::{Decode, Encode};
use tree_hash::TreeHash;
use tree_hash_derive::TreeHash;

use crate::attestation::{AggregateAndProof, AttestationData};
use crate::block::{VersionedBeaconBlock, VersionedBlindedBeaconBlock};
use crate::operations::{BeaconBlockHeader, VoluntaryExit};
use crate::primitives::{Domain, Epoch, Root, Slot};
use crate::registration::VersionedValidatorRegistration;
use crate::sync_committee::{ContributionAndProof, SyncAggregatorSelectionData};

/// One payload per sign request.
#[derive(Debug, Clone, PartialEq)]
pub enum SignPayload {
    AttestationData(AttestationData),
    BeaconBlock(VersionedBeaconBlock),
    BlindedBeaconBlock(VersionedBlindedBeaconBlock),
    AggregateAndProof(AggregateAndProof),
    VoluntaryExit(VoluntaryExit),
    /// Aggregation selection proof.
    Slot(Slot),
    /// RANDAO reveal.
    Epoch(Epoch),
    /// Sync committee message: the beacon block root being attested to.
    SyncCommitteeMessage(Root),
    SyncAggregatorSelectionData(SyncAggregatorSelectionData),
    ContributionAndProof(ContributionAndProof),
    ValidatorRegistration(VersionedValidatorRegistration),
}

/// Discriminant of [`SignPayload`], carried as a string tag on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    AttestationData,
    BeaconBlock,
    BlindedBeaconBlock,
    AggregateAndProof,
    VoluntaryExit,
    Slot,
    Epoch,
    SyncCommitteeMessage,
    SyncAggregatorSelectionData,
    ContributionAndProof,
    ValidatorRegistration,
}

impl ObjectType {
    pub const ALL: [ObjectType; 11] = [
        ObjectType::AttestationData,
        ObjectType::BeaconBlock,
        ObjectType::BlindedBeaconBlock,
        ObjectType::AggregateAndProof,
        ObjectType::VoluntaryExit,
        ObjectType::Slot,
        ObjectType::Epoch,
        ObjectType::SyncCommitteeMessage,
        ObjectType::SyncAggregatorSelectionData,
        ObjectType::ContributionAndProof,
        ObjectType::ValidatorRegistration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AttestationData => "AttestationData",
            Self::BeaconBlock => "BeaconBlock",
            Self::BlindedBeaconBlock => "BlindedBeaconBlock",
            Self::AggregateAndProof => "AggregateAndProof",
            Self::VoluntaryExit => "VoluntaryExit",
            Self::Slot => "Slot",
            Self::Epoch => "Epoch",
            Self::SyncCommitteeMessage => "SyncCommitteeMessage",
            Self::SyncAggregatorSelectionData => "SyncAggregatorSelectionData",
            Self::ContributionAndProof => "ContributionAndProof",
            Self::ValidatorRegistration => "ValidatorRegistration",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl SignPayload {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Self::AttestationData(_) => ObjectType::AttestationData,
            Self::BeaconBlock(_) => ObjectType::BeaconBlock,
            Self::BlindedBeaconBlock(_) => ObjectType::BlindedBeaconBlock,
            Self::AggregateAndProof(_) => ObjectType::AggregateAndProof,
            Self::VoluntaryExit(_) => ObjectType::VoluntaryExit,
            Self::Slot(_) => ObjectType::Slot,
            Self::Epoch(_) => ObjectType::Epoch,
            Self::SyncCommitteeMessage(_) => ObjectType::SyncCommitteeMessage,
            Self::SyncAggregatorSelectionData(_) => ObjectType::SyncAggregatorSelectionData,
            Self::ContributionAndProof(_) => ObjectType::ContributionAndProof,
            Self::ValidatorRegistration(_) => ObjectType::ValidatorRegistration,
        }
    }

    /// Hash tree root of the object being signed.
    ///
    /// Blocks are rooted through their header, which yields the same root
    /// as the full block. Sync committee messages sign the block root as-is.
    pub fn object_root(&self) -> Root {
        match self {
            Self::AttestationData(data) => data.tree_hash_root(),
            Self::BeaconBlock(block) => block.header().tree_hash_root(),
            Self::BlindedBeaconBlock(block) => block.header().tree_hash_root(),
            Self::AggregateAndProof(aggregate) => aggregate.tree_hash_root(),
            Self::VoluntaryExit(exit) => exit.tree_hash_root(),
            Self::Slot(slot) => slot.tree_hash_root(),
            Self::Epoch(epoch) => epoch.tree_hash_root(),
            Self::SyncCommitteeMessage(root) => *root,
            Self::SyncAggregatorSelectionData(data) => data.tree_hash_root(),
            Self::ContributionAndProof(contribution) => contribution.tree_hash_root(),
            Self::ValidatorRegistration(VersionedValidatorRegistration::V1(registration)) => {
                registration.tree_hash_root()
            }
        }
    }

    /// Proposal header for block payloads; `None` for everything else.
    pub fn proposal_header(&self) -> Option<BeaconBlockHeader> {
        match self {
            Self::BeaconBlock(block) => Some(block.header()),
            Self::BlindedBeaconBlock(block) => Some(block.header()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct SigningData {
    pub object_root: Root,
    pub domain: Domain,
}

/// Root actually signed: the object root bound to its domain.
pub fn compute_signing_root(object_root: Root, domain: Domain) -> Root {
    SigningData {
        object_root,
        domain,
    }
    .tree_hash_root()
}
