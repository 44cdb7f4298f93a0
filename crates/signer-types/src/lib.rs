//! # Signer Types
//!
//! Consensus payloads, key newtypes and the sign-request envelope shared by
//! every validator-signer crate.
//!
//! ## Layout
//!
//! - `primitives`: scalar aliases and SSZ re-exports
//! - `keys`: fixed-size public key and signature newtypes
//! - `attestation`, `block`, `operations`, `execution`, `sync_committee`,
//!   `registration`: SSZ containers for every signable object
//! - `payload`: the polymorphic [`SignPayload`] and signing-root math
//! - `envelope`: [`SignRequestEnvelope`]

pub mod attestation;
pub mod block;
pub mod envelope;
pub mod errors;
pub mod execution;
pub mod keys;
pub mod operations;
pub mod payload;
pub mod primitives;
pub mod registration;
pub mod sync_committee;

pub use attestation::{AggregateAndProof, Attestation, AttestationData, Checkpoint};
pub use block::{DataVersion, VersionedBeaconBlock, VersionedBlindedBeaconBlock};
pub use envelope::SignRequestEnvelope;
pub use errors::BytesError;
pub use keys::{PublicKey, Signature};
pub use operations::{BeaconBlockHeader, VoluntaryExit};
pub use payload::{compute_signing_root, ObjectType, SignPayload, SigningData};
pub use primitives::{root_from_slice, Domain, Epoch, Root, Slot};
pub use registration::{BuilderVersion, ValidatorRegistration, VersionedValidatorRegistration};
pub use sync_committee::{ContributionAndProof, SyncAggregatorSelectionData};
