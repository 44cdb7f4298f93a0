//! Sample payloads shared by the codec tests.

use signer_types::attestation::{Attestation, AttesterSlashing, IndexedAttestation};
use signer_types::block::*;
use signer_types::execution::{
    ExecutionPayload, ExecutionPayloadCapella, ExecutionPayloadHeader,
    ExecutionPayloadHeaderCapella, Withdrawal,
};
use signer_types::operations::{
    BlsToExecutionChange, Deposit, DepositData, Eth1Data, ProposerSlashing,
    SignedBeaconBlockHeader, SignedBlsToExecutionChange, SignedVoluntaryExit,
};
use signer_types::primitives::{typenum, BitList, BitVector, FixedVector, VariableList};
use signer_types::sync_committee::{SyncAggregate, SyncCommitteeContribution};
use signer_types::*;

pub fn root(byte: u8) -> Root {
    Root::from([byte; 32])
}

pub fn public_key() -> PublicKey {
    PublicKey::new([0xa5; 48])
}

pub fn envelope(payload: SignPayload) -> SignRequestEnvelope {
    SignRequestEnvelope::new(public_key(), root(0x0d), payload)
}

fn signature(byte: u8) -> FixedVector<u8, typenum::U96> {
    FixedVector::from(vec![byte; 96])
}

pub fn attestation_data(slot: u64, source: u64, target: u64) -> AttestationData {
    AttestationData {
        slot,
        index: 3,
        beacon_block_root: root(0x01),
        source: Checkpoint {
            epoch: source,
            root: root(0x02),
        },
        target: Checkpoint {
            epoch: target,
            root: root(0x03),
        },
    }
}

pub fn attestation_payload(slot: u64, source: u64, target: u64) -> SignPayload {
    SignPayload::AttestationData(attestation_data(slot, source, target))
}

fn attestation() -> Attestation {
    let mut bits = BitList::with_capacity(10).unwrap();
    bits.set(1, true).unwrap();
    bits.set(8, true).unwrap();
    Attestation {
        aggregation_bits: bits,
        data: attestation_data(100, 2, 3),
        signature: signature(0x11),
    }
}

fn signed_header(slot: u64) -> SignedBeaconBlockHeader {
    SignedBeaconBlockHeader {
        message: BeaconBlockHeader {
            slot,
            proposer_index: 9,
            parent_root: root(0x21),
            state_root: root(0x22),
            body_root: root(0x23),
        },
        signature: signature(0x24),
    }
}

fn indexed_attestation(target: u64) -> IndexedAttestation {
    IndexedAttestation {
        attesting_indices: VariableList::new(vec![1, 5, 9]).unwrap(),
        data: attestation_data(40, 1, target),
        signature: signature(0x31),
    }
}

fn sync_aggregate() -> SyncAggregate {
    let mut bits = BitVector::new();
    bits.set(0, true).unwrap();
    bits.set(511, true).unwrap();
    SyncAggregate {
        sync_committee_bits: bits,
        sync_committee_signature: signature(0x41),
    }
}

macro_rules! phase0_fields {
    () => {
        (
            signature(0x51),
            Eth1Data {
                deposit_root: root(0x52),
                deposit_count: 17,
                block_hash: root(0x53),
            },
            root(0x54),
            VariableList::new(vec![ProposerSlashing {
                signed_header_1: signed_header(6),
                signed_header_2: signed_header(6),
            }])
            .unwrap(),
            VariableList::new(vec![AttesterSlashing {
                attestation_1: indexed_attestation(4),
                attestation_2: indexed_attestation(5),
            }])
            .unwrap(),
            VariableList::new(vec![attestation()]).unwrap(),
            VariableList::new(vec![Deposit {
                proof: FixedVector::from(vec![root(0x55); 33]),
                data: DepositData {
                    pubkey: FixedVector::from(vec![0x56; 48]),
                    withdrawal_credentials: root(0x57),
                    amount: 32_000_000_000,
                    signature: signature(0x58),
                },
            }])
            .unwrap(),
            VariableList::new(vec![SignedVoluntaryExit {
                message: VoluntaryExit {
                    epoch: 8,
                    validator_index: 12,
                },
                signature: signature(0x59),
            }])
            .unwrap(),
        )
    };
}

pub fn phase0_block(slot: u64) -> BeaconBlockPhase0 {
    let (
        randao_reveal,
        eth1_data,
        graffiti,
        proposer_slashings,
        attester_slashings,
        attestations,
        deposits,
        voluntary_exits,
    ) = phase0_fields!();
    BeaconBlockPhase0 {
        slot,
        proposer_index: 4,
        parent_root: root(0x61),
        state_root: root(0x62),
        body: BeaconBlockBodyPhase0 {
            randao_reveal,
            eth1_data,
            graffiti,
            proposer_slashings,
            attester_slashings,
            attestations,
            deposits,
            voluntary_exits,
        },
    }
}

pub fn phase0_block_payload(slot: u64) -> SignPayload {
    SignPayload::BeaconBlock(VersionedBeaconBlock::Phase0(phase0_block(slot)))
}

pub fn altair_block(slot: u64) -> BeaconBlockAltair {
    let (
        randao_reveal,
        eth1_data,
        graffiti,
        proposer_slashings,
        attester_slashings,
        attestations,
        deposits,
        voluntary_exits,
    ) = phase0_fields!();
    BeaconBlockAltair {
        slot,
        proposer_index: 4,
        parent_root: root(0x61),
        state_root: root(0x62),
        body: BeaconBlockBodyAltair {
            randao_reveal,
            eth1_data,
            graffiti,
            proposer_slashings,
            attester_slashings,
            attestations,
            deposits,
            voluntary_exits,
            sync_aggregate: sync_aggregate(),
        },
    }
}

fn execution_payload() -> ExecutionPayload {
    ExecutionPayload {
        parent_hash: root(0x71),
        fee_recipient: FixedVector::from(vec![0x72; 20]),
        state_root: root(0x73),
        receipts_root: root(0x74),
        logs_bloom: FixedVector::from(vec![0x75; 256]),
        prev_randao: root(0x76),
        block_number: 1_000,
        gas_limit: 30_000_000,
        gas_used: 21_000,
        timestamp: 1_680_000_000,
        extra_data: VariableList::new(vec![0x77; 5]).unwrap(),
        base_fee_per_gas: FixedVector::from(vec![0x78; 32]),
        block_hash: root(0x79),
        transactions: VariableList::new(vec![VariableList::new(vec![0x7a; 40]).unwrap()]).unwrap(),
    }
}

fn withdrawals() -> VariableList<Withdrawal, typenum::U16> {
    VariableList::new(vec![Withdrawal {
        index: 1,
        validator_index: 2,
        address: FixedVector::from(vec![0x81; 20]),
        amount: 3,
    }])
    .unwrap()
}

fn bls_changes() -> BlsToExecutionChanges {
    VariableList::new(vec![SignedBlsToExecutionChange {
        message: BlsToExecutionChange {
            validator_index: 5,
            from_bls_pubkey: FixedVector::from(vec![0x82; 48]),
            to_execution_address: FixedVector::from(vec![0x83; 20]),
        },
        signature: signature(0x84),
    }])
    .unwrap()
}

pub fn bellatrix_block(slot: u64) -> BeaconBlockBellatrix {
    let altair = altair_block(slot);
    let body = altair.body;
    BeaconBlockBellatrix {
        slot,
        proposer_index: altair.proposer_index,
        parent_root: altair.parent_root,
        state_root: altair.state_root,
        body: BeaconBlockBodyBellatrix {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload: execution_payload(),
        },
    }
}

pub fn capella_block(slot: u64) -> BeaconBlockCapella {
    let altair = altair_block(slot);
    let body = altair.body;
    let payload = execution_payload();
    BeaconBlockCapella {
        slot,
        proposer_index: altair.proposer_index,
        parent_root: altair.parent_root,
        state_root: altair.state_root,
        body: BeaconBlockBodyCapella {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload: ExecutionPayloadCapella {
                parent_hash: payload.parent_hash,
                fee_recipient: payload.fee_recipient,
                state_root: payload.state_root,
                receipts_root: payload.receipts_root,
                logs_bloom: payload.logs_bloom,
                prev_randao: payload.prev_randao,
                block_number: payload.block_number,
                gas_limit: payload.gas_limit,
                gas_used: payload.gas_used,
                timestamp: payload.timestamp,
                extra_data: payload.extra_data,
                base_fee_per_gas: payload.base_fee_per_gas,
                block_hash: payload.block_hash,
                transactions: payload.transactions,
                withdrawals: withdrawals(),
            },
            bls_to_execution_changes: bls_changes(),
        },
    }
}

fn payload_header() -> ExecutionPayloadHeader {
    let payload = execution_payload();
    ExecutionPayloadHeader {
        parent_hash: payload.parent_hash,
        fee_recipient: payload.fee_recipient,
        state_root: payload.state_root,
        receipts_root: payload.receipts_root,
        logs_bloom: payload.logs_bloom,
        prev_randao: payload.prev_randao,
        block_number: payload.block_number,
        gas_limit: payload.gas_limit,
        gas_used: payload.gas_used,
        timestamp: payload.timestamp,
        extra_data: payload.extra_data,
        base_fee_per_gas: payload.base_fee_per_gas,
        block_hash: payload.block_hash,
        transactions_root: root(0x91),
    }
}

pub fn blinded_bellatrix_block(slot: u64) -> BlindedBeaconBlockBellatrix {
    let altair = altair_block(slot);
    let body = altair.body;
    BlindedBeaconBlockBellatrix {
        slot,
        proposer_index: altair.proposer_index,
        parent_root: altair.parent_root,
        state_root: altair.state_root,
        body: BlindedBeaconBlockBodyBellatrix {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload_header: payload_header(),
        },
    }
}

pub fn blinded_capella_block(slot: u64) -> BlindedBeaconBlockCapella {
    let altair = altair_block(slot);
    let body = altair.body;
    let header = payload_header();
    BlindedBeaconBlockCapella {
        slot,
        proposer_index: altair.proposer_index,
        parent_root: altair.parent_root,
        state_root: altair.state_root,
        body: BlindedBeaconBlockBodyCapella {
            randao_reveal: body.randao_reveal,
            eth1_data: body.eth1_data,
            graffiti: body.graffiti,
            proposer_slashings: body.proposer_slashings,
            attester_slashings: body.attester_slashings,
            attestations: body.attestations,
            deposits: body.deposits,
            voluntary_exits: body.voluntary_exits,
            sync_aggregate: body.sync_aggregate,
            execution_payload_header: ExecutionPayloadHeaderCapella {
                parent_hash: header.parent_hash,
                fee_recipient: header.fee_recipient,
                state_root: header.state_root,
                receipts_root: header.receipts_root,
                logs_bloom: header.logs_bloom,
                prev_randao: header.prev_randao,
                block_number: header.block_number,
                gas_limit: header.gas_limit,
                gas_used: header.gas_used,
                timestamp: header.timestamp,
                extra_data: header.extra_data,
                base_fee_per_gas: header.base_fee_per_gas,
                block_hash: header.block_hash,
                transactions_root: header.transactions_root,
                withdrawals_root: root(0x92),
            },
            bls_to_execution_changes: bls_changes(),
        },
    }
}

pub fn aggregate_and_proof() -> AggregateAndProof {
    AggregateAndProof {
        aggregator_index: 77,
        aggregate: attestation(),
        selection_proof: signature(0xa1),
    }
}

pub fn contribution_and_proof() -> ContributionAndProof {
    let mut bits = BitVector::new();
    bits.set(3, true).unwrap();
    ContributionAndProof {
        aggregator_index: 12,
        contribution: SyncCommitteeContribution {
            slot: 300,
            beacon_block_root: root(0xb1),
            subcommittee_index: 2,
            aggregation_bits: bits,
            signature: signature(0xb2),
        },
        selection_proof: signature(0xb3),
    }
}

pub fn registration() -> SignPayload {
    SignPayload::ValidatorRegistration(VersionedValidatorRegistration::V1(ValidatorRegistration {
        fee_recipient: FixedVector::from(vec![0xc1; 20]),
        gas_limit: 30_000_000,
        timestamp: 1_700_000_000,
        pubkey: FixedVector::from(vec![0xa5; 48]),
    }))
}

/// Payloads with a legacy wire shape.
pub fn legacy_payloads() -> Vec<SignPayload> {
    vec![
        attestation_payload(284115, 77, 78),
        phase0_block_payload(10),
        SignPayload::BeaconBlock(VersionedBeaconBlock::Altair(altair_block(11))),
        SignPayload::AggregateAndProof(aggregate_and_proof()),
        SignPayload::VoluntaryExit(VoluntaryExit {
            epoch: 90,
            validator_index: 1234,
        }),
        SignPayload::Slot(17),
        SignPayload::Epoch(3),
        SignPayload::SyncCommitteeMessage(root(0xe1)),
        SignPayload::SyncAggregatorSelectionData(SyncAggregatorSelectionData {
            slot: 301,
            subcommittee_index: 1,
        }),
        SignPayload::ContributionAndProof(contribution_and_proof()),
    ]
}

/// Payloads only the current format can carry.
pub fn current_only_payloads() -> Vec<SignPayload> {
    vec![
        SignPayload::BeaconBlock(VersionedBeaconBlock::Bellatrix(bellatrix_block(12))),
        SignPayload::BeaconBlock(VersionedBeaconBlock::Capella(capella_block(13))),
        SignPayload::BlindedBeaconBlock(VersionedBlindedBeaconBlock::Bellatrix(
            blinded_bellatrix_block(14),
        )),
        SignPayload::BlindedBeaconBlock(VersionedBlindedBeaconBlock::Capella(
            blinded_capella_block(15),
        )),
        registration(),
    ]
}

pub fn all_payloads() -> Vec<SignPayload> {
    let mut payloads = legacy_payloads();
    payloads.extend(current_only_payloads());
    payloads
}
