//! Legacy wire messages.
//!
//! Field numbers are fixed: clients in the field still emit these bytes.
//! Fixed-size byte fields are plain `bytes`; bitfields carry their SSZ form.

/// Top-level legacy sign request.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignRequest {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: Vec<u8>,
    /// Empty when the client sent no precomputed root.
    #[prost(bytes = "vec", tag = "2")]
    pub signing_root: Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub signature_domain: Vec<u8>,
    #[prost(
        oneof = "sign_request::Object",
        tags = "101, 102, 103, 104, 105, 106, 107, 108, 109, 110"
    )]
    pub object: Option<sign_request::Object>,
}

pub mod sign_request {
    /// The payload; whichever tag is present selects the variant.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Object {
        #[prost(message, tag = "101")]
        AttestationData(super::AttestationData),
        #[prost(message, tag = "102")]
        Block(super::BeaconBlock),
        #[prost(message, tag = "103")]
        AggregateAttestationAndProof(super::AggregateAttestationAndProof),
        #[prost(message, tag = "104")]
        Exit(super::VoluntaryExit),
        #[prost(uint64, tag = "105")]
        Slot(u64),
        #[prost(uint64, tag = "106")]
        Epoch(u64),
        #[prost(bytes = "vec", tag = "107")]
        SyncCommitteeMessage(Vec<u8>),
        #[prost(message, tag = "108")]
        SyncAggregatorSelectionData(super::SyncAggregatorSelectionData),
        #[prost(message, tag = "109")]
        ContributionAndProof(super::ContributionAndProof),
        #[prost(message, tag = "110")]
        BlockV2(super::BeaconBlockAltair),
    }
}

// ===== Attestations =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Checkpoint {
    #[prost(uint64, tag = "1")]
    pub epoch: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub root: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttestationData {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(uint64, tag = "2")]
    pub committee_index: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub beacon_block_root: Vec<u8>,
    #[prost(message, optional, tag = "4")]
    pub source: Option<Checkpoint>,
    #[prost(message, optional, tag = "5")]
    pub target: Option<Checkpoint>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attestation {
    #[prost(bytes = "vec", tag = "1")]
    pub aggregation_bits: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub data: Option<AttestationData>,
    #[prost(bytes = "vec", tag = "3")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IndexedAttestation {
    #[prost(uint64, repeated, tag = "1")]
    pub attesting_indices: Vec<u64>,
    #[prost(message, optional, tag = "2")]
    pub data: Option<AttestationData>,
    #[prost(bytes = "vec", tag = "3")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AggregateAttestationAndProof {
    #[prost(uint64, tag = "1")]
    pub aggregator_index: u64,
    #[prost(message, optional, tag = "2")]
    pub aggregate: Option<Attestation>,
    #[prost(bytes = "vec", tag = "3")]
    pub selection_proof: Vec<u8>,
}

// ===== Block operations =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Eth1Data {
    #[prost(bytes = "vec", tag = "1")]
    pub deposit_root: Vec<u8>,
    #[prost(uint64, tag = "2")]
    pub deposit_count: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub block_hash: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeaconBlockHeader {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(uint64, tag = "2")]
    pub proposer_index: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub parent_root: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub state_root: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub body_root: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedBeaconBlockHeader {
    #[prost(message, optional, tag = "1")]
    pub header: Option<BeaconBlockHeader>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProposerSlashing {
    #[prost(message, optional, tag = "1")]
    pub header_1: Option<SignedBeaconBlockHeader>,
    #[prost(message, optional, tag = "2")]
    pub header_2: Option<SignedBeaconBlockHeader>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttesterSlashing {
    #[prost(message, optional, tag = "1")]
    pub attestation_1: Option<IndexedAttestation>,
    #[prost(message, optional, tag = "2")]
    pub attestation_2: Option<IndexedAttestation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DepositData {
    #[prost(bytes = "vec", tag = "1")]
    pub public_key: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub withdrawal_credentials: Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub amount: u64,
    #[prost(bytes = "vec", tag = "4")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Deposit {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub proof: Vec<Vec<u8>>,
    #[prost(message, optional, tag = "2")]
    pub data: Option<DepositData>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoluntaryExit {
    #[prost(uint64, tag = "1")]
    pub epoch: u64,
    #[prost(uint64, tag = "2")]
    pub validator_index: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedVoluntaryExit {
    #[prost(message, optional, tag = "1")]
    pub exit: Option<VoluntaryExit>,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: Vec<u8>,
}

// ===== Blocks =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeaconBlockBody {
    #[prost(bytes = "vec", tag = "1")]
    pub randao_reveal: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub eth1_data: Option<Eth1Data>,
    #[prost(bytes = "vec", tag = "3")]
    pub graffiti: Vec<u8>,
    #[prost(message, repeated, tag = "4")]
    pub proposer_slashings: Vec<ProposerSlashing>,
    #[prost(message, repeated, tag = "5")]
    pub attester_slashings: Vec<AttesterSlashing>,
    #[prost(message, repeated, tag = "6")]
    pub attestations: Vec<Attestation>,
    #[prost(message, repeated, tag = "7")]
    pub deposits: Vec<Deposit>,
    #[prost(message, repeated, tag = "8")]
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeaconBlock {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(uint64, tag = "2")]
    pub proposer_index: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub parent_root: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub state_root: Vec<u8>,
    #[prost(message, optional, tag = "5")]
    pub body: Option<BeaconBlockBody>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SyncAggregate {
    #[prost(bytes = "vec", tag = "1")]
    pub sync_committee_bits: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub sync_committee_signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeaconBlockBodyAltair {
    #[prost(bytes = "vec", tag = "1")]
    pub randao_reveal: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub eth1_data: Option<Eth1Data>,
    #[prost(bytes = "vec", tag = "3")]
    pub graffiti: Vec<u8>,
    #[prost(message, repeated, tag = "4")]
    pub proposer_slashings: Vec<ProposerSlashing>,
    #[prost(message, repeated, tag = "5")]
    pub attester_slashings: Vec<AttesterSlashing>,
    #[prost(message, repeated, tag = "6")]
    pub attestations: Vec<Attestation>,
    #[prost(message, repeated, tag = "7")]
    pub deposits: Vec<Deposit>,
    #[prost(message, repeated, tag = "8")]
    pub voluntary_exits: Vec<SignedVoluntaryExit>,
    #[prost(message, optional, tag = "9")]
    pub sync_aggregate: Option<SyncAggregate>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BeaconBlockAltair {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(uint64, tag = "2")]
    pub proposer_index: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub parent_root: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub state_root: Vec<u8>,
    #[prost(message, optional, tag = "5")]
    pub body: Option<BeaconBlockBodyAltair>,
}

// ===== Sync committee =====

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SyncAggregatorSelectionData {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(uint64, tag = "2")]
    pub subcommittee_index: u64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SyncCommitteeContribution {
    #[prost(uint64, tag = "1")]
    pub slot: u64,
    #[prost(bytes = "vec", tag = "2")]
    pub block_root: Vec<u8>,
    #[prost(uint64, tag = "3")]
    pub subcommittee_index: u64,
    #[prost(bytes = "vec", tag = "4")]
    pub aggregation_bits: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub signature: Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ContributionAndProof {
    #[prost(uint64, tag = "1")]
    pub aggregator_index: u64,
    #[prost(message, optional, tag = "2")]
    pub contribution: Option<SyncCommitteeContribution>,
    #[prost(bytes = "vec", tag = "3")]
    pub selection_proof: Vec<u8>,
}
