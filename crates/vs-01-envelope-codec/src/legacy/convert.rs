//! Conversions between legacy wire messages and typed payloads.
//!
//! Typed → wire is infallible. Wire → typed checks every fixed-size field,
//! list bound and required sub-message.

use signer_types::attestation::{
    AggregateAndProof, Attestation, AttestationData, AttesterSlashing, Checkpoint,
    IndexedAttestation,
};
use signer_types::block::{
    BeaconBlockAltair, BeaconBlockBodyAltair, BeaconBlockBodyPhase0, BeaconBlockPhase0,
};
use signer_types::operations::{
    BeaconBlockHeader, Deposit, DepositData, Eth1Data, ProposerSlashing, SignedBeaconBlockHeader,
    SignedVoluntaryExit, VoluntaryExit,
};
use signer_types::primitives::typenum::Unsigned;
use signer_types::primitives::{Decode, Encode, FixedVector, Root, VariableList};
use signer_types::root_from_slice;
use signer_types::sync_committee::{
    ContributionAndProof, SyncAggregate, SyncAggregatorSelectionData, SyncCommitteeContribution,
};

use super::proto;
use crate::error::{CodecError, CodecResult};

// =============================================================================
// Field helpers
// =============================================================================

pub(crate) fn root(field: &'static str, bytes: &[u8]) -> CodecResult<Root> {
    root_from_slice(bytes).ok_or(CodecError::InvalidLength {
        field,
        expected: 32,
        actual: bytes.len(),
    })
}

fn fixed<N: Unsigned>(field: &'static str, bytes: Vec<u8>) -> CodecResult<FixedVector<u8, N>> {
    let actual = bytes.len();
    FixedVector::new(bytes).map_err(|_| CodecError::InvalidLength {
        field,
        expected: N::to_usize(),
        actual,
    })
}

fn bounded<T, N: Unsigned>(field: &'static str, items: Vec<T>) -> CodecResult<VariableList<T, N>> {
    let actual = items.len();
    VariableList::new(items).map_err(|_| CodecError::TooManyItems {
        field,
        max: N::to_usize(),
        actual,
    })
}

fn convert_list<P, T, N>(field: &'static str, items: Vec<P>) -> CodecResult<VariableList<T, N>>
where
    T: TryFrom<P, Error = CodecError>,
    N: Unsigned,
{
    let converted = items
        .into_iter()
        .map(T::try_from)
        .collect::<CodecResult<Vec<T>>>()?;
    bounded(field, converted)
}

fn required<T>(field: &'static str, value: Option<T>) -> CodecResult<T> {
    value.ok_or(CodecError::MissingField(field))
}

/// Bitfields travel as their SSZ bytes.
fn bitfield<B: Decode>(bytes: &[u8]) -> CodecResult<B> {
    Ok(B::from_ssz_bytes(bytes)?)
}

// =============================================================================
// Typed → wire
// =============================================================================

impl From<&Checkpoint> for proto::Checkpoint {
    fn from(c: &Checkpoint) -> Self {
        Self {
            epoch: c.epoch,
            root: c.root.to_vec(),
        }
    }
}

impl From<&AttestationData> for proto::AttestationData {
    fn from(d: &AttestationData) -> Self {
        Self {
            slot: d.slot,
            committee_index: d.index,
            beacon_block_root: d.beacon_block_root.to_vec(),
            source: Some((&d.source).into()),
            target: Some((&d.target).into()),
        }
    }
}

impl From<&Attestation> for proto::Attestation {
    fn from(a: &Attestation) -> Self {
        Self {
            aggregation_bits: a.aggregation_bits.as_ssz_bytes(),
            data: Some((&a.data).into()),
            signature: a.signature.to_vec(),
        }
    }
}

impl From<&IndexedAttestation> for proto::IndexedAttestation {
    fn from(a: &IndexedAttestation) -> Self {
        Self {
            attesting_indices: a.attesting_indices.to_vec(),
            data: Some((&a.data).into()),
            signature: a.signature.to_vec(),
        }
    }
}

impl From<&AggregateAndProof> for proto::AggregateAttestationAndProof {
    fn from(a: &AggregateAndProof) -> Self {
        Self {
            aggregator_index: a.aggregator_index,
            aggregate: Some((&a.aggregate).into()),
            selection_proof: a.selection_proof.to_vec(),
        }
    }
}

impl From<&Eth1Data> for proto::Eth1Data {
    fn from(e: &Eth1Data) -> Self {
        Self {
            deposit_root: e.deposit_root.to_vec(),
            deposit_count: e.deposit_count,
            block_hash: e.block_hash.to_vec(),
        }
    }
}

impl From<&BeaconBlockHeader> for proto::BeaconBlockHeader {
    fn from(h: &BeaconBlockHeader) -> Self {
        Self {
            slot: h.slot,
            proposer_index: h.proposer_index,
            parent_root: h.parent_root.to_vec(),
            state_root: h.state_root.to_vec(),
            body_root: h.body_root.to_vec(),
        }
    }
}

impl From<&SignedBeaconBlockHeader> for proto::SignedBeaconBlockHeader {
    fn from(h: &SignedBeaconBlockHeader) -> Self {
        Self {
            header: Some((&h.message).into()),
            signature: h.signature.to_vec(),
        }
    }
}

impl From<&ProposerSlashing> for proto::ProposerSlashing {
    fn from(s: &ProposerSlashing) -> Self {
        Self {
            header_1: Some((&s.signed_header_1).into()),
            header_2: Some((&s.signed_header_2).into()),
        }
    }
}

impl From<&AttesterSlashing> for proto::AttesterSlashing {
    fn from(s: &AttesterSlashing) -> Self {
        Self {
            attestation_1: Some((&s.attestation_1).into()),
            attestation_2: Some((&s.attestation_2).into()),
        }
    }
}

impl From<&Deposit> for proto::Deposit {
    fn from(d: &Deposit) -> Self {
        Self {
            proof: d.proof.iter().map(|node| node.to_vec()).collect(),
            data: Some(proto::DepositData {
                public_key: d.data.pubkey.to_vec(),
                withdrawal_credentials: d.data.withdrawal_credentials.to_vec(),
                amount: d.data.amount,
                signature: d.data.signature.to_vec(),
            }),
        }
    }
}

impl From<&VoluntaryExit> for proto::VoluntaryExit {
    fn from(e: &VoluntaryExit) -> Self {
        Self {
            epoch: e.epoch,
            validator_index: e.validator_index,
        }
    }
}

impl From<&SignedVoluntaryExit> for proto::SignedVoluntaryExit {
    fn from(e: &SignedVoluntaryExit) -> Self {
        Self {
            exit: Some((&e.message).into()),
            signature: e.signature.to_vec(),
        }
    }
}

impl From<&BeaconBlockPhase0> for proto::BeaconBlock {
    fn from(b: &BeaconBlockPhase0) -> Self {
        let body = &b.body;
        Self {
            slot: b.slot,
            proposer_index: b.proposer_index,
            parent_root: b.parent_root.to_vec(),
            state_root: b.state_root.to_vec(),
            body: Some(proto::BeaconBlockBody {
                randao_reveal: body.randao_reveal.to_vec(),
                eth1_data: Some((&body.eth1_data).into()),
                graffiti: body.graffiti.to_vec(),
                proposer_slashings: body.proposer_slashings.iter().map(Into::into).collect(),
                attester_slashings: body.attester_slashings.iter().map(Into::into).collect(),
                attestations: body.attestations.iter().map(Into::into).collect(),
                deposits: body.deposits.iter().map(Into::into).collect(),
                voluntary_exits: body.voluntary_exits.iter().map(Into::into).collect(),
            }),
        }
    }
}

impl From<&BeaconBlockAltair> for proto::BeaconBlockAltair {
    fn from(b: &BeaconBlockAltair) -> Self {
        let body = &b.body;
        Self {
            slot: b.slot,
            proposer_index: b.proposer_index,
            parent_root: b.parent_root.to_vec(),
            state_root: b.state_root.to_vec(),
            body: Some(proto::BeaconBlockBodyAltair {
                randao_reveal: body.randao_reveal.to_vec(),
                eth1_data: Some((&body.eth1_data).into()),
                graffiti: body.graffiti.to_vec(),
                proposer_slashings: body.proposer_slashings.iter().map(Into::into).collect(),
                attester_slashings: body.attester_slashings.iter().map(Into::into).collect(),
                attestations: body.attestations.iter().map(Into::into).collect(),
                deposits: body.deposits.iter().map(Into::into).collect(),
                voluntary_exits: body.voluntary_exits.iter().map(Into::into).collect(),
                sync_aggregate: Some(proto::SyncAggregate {
                    sync_committee_bits: body.sync_aggregate.sync_committee_bits.as_ssz_bytes(),
                    sync_committee_signature: body
                        .sync_aggregate
                        .sync_committee_signature
                        .to_vec(),
                }),
            }),
        }
    }
}

impl From<&SyncAggregatorSelectionData> for proto::SyncAggregatorSelectionData {
    fn from(d: &SyncAggregatorSelectionData) -> Self {
        Self {
            slot: d.slot,
            subcommittee_index: d.subcommittee_index,
        }
    }
}

impl From<&ContributionAndProof> for proto::ContributionAndProof {
    fn from(c: &ContributionAndProof) -> Self {
        let contribution = &c.contribution;
        Self {
            aggregator_index: c.aggregator_index,
            contribution: Some(proto::SyncCommitteeContribution {
                slot: contribution.slot,
                block_root: contribution.beacon_block_root.to_vec(),
                subcommittee_index: contribution.subcommittee_index,
                aggregation_bits: contribution.aggregation_bits.as_ssz_bytes(),
                signature: contribution.signature.to_vec(),
            }),
            selection_proof: c.selection_proof.to_vec(),
        }
    }
}

// =============================================================================
// Wire → typed
// =============================================================================

impl TryFrom<proto::Checkpoint> for Checkpoint {
    type Error = CodecError;

    fn try_from(c: proto::Checkpoint) -> CodecResult<Self> {
        Ok(Self {
            epoch: c.epoch,
            root: root("checkpoint.root", &c.root)?,
        })
    }
}

impl TryFrom<proto::AttestationData> for AttestationData {
    type Error = CodecError;

    fn try_from(d: proto::AttestationData) -> CodecResult<Self> {
        Ok(Self {
            slot: d.slot,
            index: d.committee_index,
            beacon_block_root: root("attestation_data.beacon_block_root", &d.beacon_block_root)?,
            source: required("attestation_data.source", d.source)?.try_into()?,
            target: required("attestation_data.target", d.target)?.try_into()?,
        })
    }
}

impl TryFrom<proto::Attestation> for Attestation {
    type Error = CodecError;

    fn try_from(a: proto::Attestation) -> CodecResult<Self> {
        Ok(Self {
            aggregation_bits: bitfield(&a.aggregation_bits)?,
            data: required("attestation.data", a.data)?.try_into()?,
            signature: fixed("attestation.signature", a.signature)?,
        })
    }
}

impl TryFrom<proto::IndexedAttestation> for IndexedAttestation {
    type Error = CodecError;

    fn try_from(a: proto::IndexedAttestation) -> CodecResult<Self> {
        Ok(Self {
            attesting_indices: bounded("indexed_attestation.attesting_indices", a.attesting_indices)?,
            data: required("indexed_attestation.data", a.data)?.try_into()?,
            signature: fixed("indexed_attestation.signature", a.signature)?,
        })
    }
}

impl TryFrom<proto::AggregateAttestationAndProof> for AggregateAndProof {
    type Error = CodecError;

    fn try_from(a: proto::AggregateAttestationAndProof) -> CodecResult<Self> {
        Ok(Self {
            aggregator_index: a.aggregator_index,
            aggregate: required("aggregate_and_proof.aggregate", a.aggregate)?.try_into()?,
            selection_proof: fixed("aggregate_and_proof.selection_proof", a.selection_proof)?,
        })
    }
}

impl TryFrom<proto::Eth1Data> for Eth1Data {
    type Error = CodecError;

    fn try_from(e: proto::Eth1Data) -> CodecResult<Self> {
        Ok(Self {
            deposit_root: root("eth1_data.deposit_root", &e.deposit_root)?,
            deposit_count: e.deposit_count,
            block_hash: root("eth1_data.block_hash", &e.block_hash)?,
        })
    }
}

impl TryFrom<proto::BeaconBlockHeader> for BeaconBlockHeader {
    type Error = CodecError;

    fn try_from(h: proto::BeaconBlockHeader) -> CodecResult<Self> {
        Ok(Self {
            slot: h.slot,
            proposer_index: h.proposer_index,
            parent_root: root("header.parent_root", &h.parent_root)?,
            state_root: root("header.state_root", &h.state_root)?,
            body_root: root("header.body_root", &h.body_root)?,
        })
    }
}

impl TryFrom<proto::SignedBeaconBlockHeader> for SignedBeaconBlockHeader {
    type Error = CodecError;

    fn try_from(h: proto::SignedBeaconBlockHeader) -> CodecResult<Self> {
        Ok(Self {
            message: required("signed_header.header", h.header)?.try_into()?,
            signature: fixed("signed_header.signature", h.signature)?,
        })
    }
}

impl TryFrom<proto::ProposerSlashing> for ProposerSlashing {
    type Error = CodecError;

    fn try_from(s: proto::ProposerSlashing) -> CodecResult<Self> {
        Ok(Self {
            signed_header_1: required("proposer_slashing.header_1", s.header_1)?.try_into()?,
            signed_header_2: required("proposer_slashing.header_2", s.header_2)?.try_into()?,
        })
    }
}

impl TryFrom<proto::AttesterSlashing> for AttesterSlashing {
    type Error = CodecError;

    fn try_from(s: proto::AttesterSlashing) -> CodecResult<Self> {
        Ok(Self {
            attestation_1: required("attester_slashing.attestation_1", s.attestation_1)?
                .try_into()?,
            attestation_2: required("attester_slashing.attestation_2", s.attestation_2)?
                .try_into()?,
        })
    }
}

impl TryFrom<proto::Deposit> for Deposit {
    type Error = CodecError;

    fn try_from(d: proto::Deposit) -> CodecResult<Self> {
        let branch = d
            .proof
            .iter()
            .map(|node| root("deposit.proof", node))
            .collect::<CodecResult<Vec<Root>>>()?;
        let depth = branch.len();
        let proof = FixedVector::new(branch).map_err(|_| CodecError::InvalidLength {
            field: "deposit.proof",
            expected: 33,
            actual: depth,
        })?;
        let data = required("deposit.data", d.data)?;
        Ok(Self {
            proof,
            data: DepositData {
                pubkey: fixed("deposit_data.public_key", data.public_key)?,
                withdrawal_credentials: root(
                    "deposit_data.withdrawal_credentials",
                    &data.withdrawal_credentials,
                )?,
                amount: data.amount,
                signature: fixed("deposit_data.signature", data.signature)?,
            },
        })
    }
}

impl From<proto::VoluntaryExit> for VoluntaryExit {
    fn from(e: proto::VoluntaryExit) -> Self {
        Self {
            epoch: e.epoch,
            validator_index: e.validator_index,
        }
    }
}

impl TryFrom<proto::SignedVoluntaryExit> for SignedVoluntaryExit {
    type Error = CodecError;

    fn try_from(e: proto::SignedVoluntaryExit) -> CodecResult<Self> {
        Ok(Self {
            message: required("signed_exit.exit", e.exit)?.into(),
            signature: fixed("signed_exit.signature", e.signature)?,
        })
    }
}

impl TryFrom<proto::BeaconBlock> for BeaconBlockPhase0 {
    type Error = CodecError;

    fn try_from(b: proto::BeaconBlock) -> CodecResult<Self> {
        let body = required("block.body", b.body)?;
        Ok(Self {
            slot: b.slot,
            proposer_index: b.proposer_index,
            parent_root: root("block.parent_root", &b.parent_root)?,
            state_root: root("block.state_root", &b.state_root)?,
            body: BeaconBlockBodyPhase0 {
                randao_reveal: fixed("body.randao_reveal", body.randao_reveal)?,
                eth1_data: required("body.eth1_data", body.eth1_data)?.try_into()?,
                graffiti: root("body.graffiti", &body.graffiti)?,
                proposer_slashings: convert_list("body.proposer_slashings", body.proposer_slashings)?,
                attester_slashings: convert_list("body.attester_slashings", body.attester_slashings)?,
                attestations: convert_list("body.attestations", body.attestations)?,
                deposits: convert_list("body.deposits", body.deposits)?,
                voluntary_exits: convert_list("body.voluntary_exits", body.voluntary_exits)?,
            },
        })
    }
}

impl TryFrom<proto::BeaconBlockAltair> for BeaconBlockAltair {
    type Error = CodecError;

    fn try_from(b: proto::BeaconBlockAltair) -> CodecResult<Self> {
        let body = required("block.body", b.body)?;
        let aggregate = required("body.sync_aggregate", body.sync_aggregate)?;
        Ok(Self {
            slot: b.slot,
            proposer_index: b.proposer_index,
            parent_root: root("block.parent_root", &b.parent_root)?,
            state_root: root("block.state_root", &b.state_root)?,
            body: BeaconBlockBodyAltair {
                randao_reveal: fixed("body.randao_reveal", body.randao_reveal)?,
                eth1_data: required("body.eth1_data", body.eth1_data)?.try_into()?,
                graffiti: root("body.graffiti", &body.graffiti)?,
                proposer_slashings: convert_list("body.proposer_slashings", body.proposer_slashings)?,
                attester_slashings: convert_list("body.attester_slashings", body.attester_slashings)?,
                attestations: convert_list("body.attestations", body.attestations)?,
                deposits: convert_list("body.deposits", body.deposits)?,
                voluntary_exits: convert_list("body.voluntary_exits", body.voluntary_exits)?,
                sync_aggregate: SyncAggregate {
                    sync_committee_bits: bitfield(&aggregate.sync_committee_bits)?,
                    sync_committee_signature: fixed(
                        "sync_aggregate.sync_committee_signature",
                        aggregate.sync_committee_signature,
                    )?,
                },
            },
        })
    }
}

impl From<proto::SyncAggregatorSelectionData> for SyncAggregatorSelectionData {
    fn from(d: proto::SyncAggregatorSelectionData) -> Self {
        Self {
            slot: d.slot,
            subcommittee_index: d.subcommittee_index,
        }
    }
}

impl TryFrom<proto::ContributionAndProof> for ContributionAndProof {
    type Error = CodecError;

    fn try_from(c: proto::ContributionAndProof) -> CodecResult<Self> {
        let contribution = required("contribution_and_proof.contribution", c.contribution)?;
        Ok(Self {
            aggregator_index: c.aggregator_index,
            contribution: SyncCommitteeContribution {
                slot: contribution.slot,
                beacon_block_root: root("contribution.block_root", &contribution.block_root)?,
                subcommittee_index: contribution.subcommittee_index,
                aggregation_bits: bitfield(&contribution.aggregation_bits)?,
                signature: fixed("contribution.signature", contribution.signature)?,
            },
            selection_proof: fixed("contribution_and_proof.selection_proof", c.selection_proof)?,
        })
    }
}
