//! # Current Wire Format
//!
//! A JSON record wrapping the SSZ bytes of exactly one payload:
//!
//! ```json
//! {
//!   "publicKey": "0x…48 bytes",
//!   "signingRoot": "0x…32 bytes",      // optional
//!   "signatureDomain": "0x…32 bytes",
//!   "objectType": "BeaconBlock",        // "" when there is no payload
//!   "version": 1,                        // DataVersion / BuilderVersion, else 0
//!   "data": "0x…SSZ bytes"
//! }
//! ```

use serde::{Deserialize, Serialize};
use signer_types::block::{
    BeaconBlockAltair, BeaconBlockBellatrix, BeaconBlockCapella, BeaconBlockPhase0,
    BlindedBeaconBlockBellatrix, BlindedBeaconBlockCapella,
};
use signer_types::primitives::{Decode, Encode};
use signer_types::{
    AggregateAndProof, AttestationData, BuilderVersion, ContributionAndProof, DataVersion,
    ObjectType, PublicKey, Root, SignPayload, SignRequestEnvelope, SyncAggregatorSelectionData,
    ValidatorRegistration, VersionedBeaconBlock, VersionedBlindedBeaconBlock,
    VersionedValidatorRegistration, VoluntaryExit,
};

use crate::error::{CodecError, CodecResult};
use crate::{Codec, WireFormat};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRecord {
    public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    signing_root: Option<String>,
    signature_domain: String,
    #[serde(default)]
    object_type: String,
    #[serde(default)]
    version: u64,
    #[serde(default)]
    data: String,
}

/// Codec for the current SSZ-in-JSON format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SszJsonCodec;

impl Codec for SszJsonCodec {
    fn format(&self) -> WireFormat {
        WireFormat::Current
    }

    fn encode(&self, envelope: &SignRequestEnvelope) -> CodecResult<Vec<u8>> {
        let (object_type, version, data) = match &envelope.payload {
            Some(payload) => (
                payload.object_type().to_string(),
                payload_version(payload),
                encode_hex(&payload_bytes(payload)),
            ),
            None => (String::new(), 0, String::new()),
        };

        let record = EnvelopeRecord {
            public_key: encode_hex(envelope.public_key.as_bytes()),
            signing_root: envelope.signing_root.map(|root| encode_hex(root.as_slice())),
            signature_domain: encode_hex(envelope.signature_domain.as_slice()),
            object_type,
            version,
            data,
        };
        Ok(serde_json::to_vec(&record)?)
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<SignRequestEnvelope> {
        let record: EnvelopeRecord = serde_json::from_slice(bytes)?;

        let key_bytes = decode_hex("publicKey", &record.public_key)?;
        let public_key = PublicKey::from_slice(&key_bytes).map_err(|_| CodecError::InvalidLength {
            field: "publicKey",
            expected: PublicKey::LEN,
            actual: key_bytes.len(),
        })?;
        let signing_root = match record.signing_root.as_deref() {
            None | Some("") => None,
            Some(hex) => Some(decode_root("signingRoot", hex)?),
        };
        let signature_domain = decode_root("signatureDomain", &record.signature_domain)?;

        let data = decode_hex("data", &record.data)?;
        let payload = if record.object_type.is_empty() {
            if !data.is_empty() {
                return Err(CodecError::Envelope(
                    "payload data present without an object type".to_string(),
                ));
            }
            None
        } else {
            let kind: ObjectType = record
                .object_type
                .parse()
                .map_err(CodecError::UnknownObjectType)?;
            Some(decode_payload(kind, record.version, &data)?)
        };

        Ok(SignRequestEnvelope {
            public_key,
            signing_root,
            signature_domain,
            payload,
        })
    }
}

// =============================================================================
// Payload dispatch
// =============================================================================

fn payload_version(payload: &SignPayload) -> u64 {
    match payload {
        SignPayload::BeaconBlock(block) => block.version().as_u64(),
        SignPayload::BlindedBeaconBlock(block) => block.version().as_u64(),
        SignPayload::ValidatorRegistration(registration) => registration.version().as_u64(),
        _ => 0,
    }
}

fn payload_bytes(payload: &SignPayload) -> Vec<u8> {
    match payload {
        SignPayload::AttestationData(data) => data.as_ssz_bytes(),
        SignPayload::BeaconBlock(block) => match block {
            VersionedBeaconBlock::Phase0(b) => b.as_ssz_bytes(),
            VersionedBeaconBlock::Altair(b) => b.as_ssz_bytes(),
            VersionedBeaconBlock::Bellatrix(b) => b.as_ssz_bytes(),
            VersionedBeaconBlock::Capella(b) => b.as_ssz_bytes(),
        },
        SignPayload::BlindedBeaconBlock(block) => match block {
            VersionedBlindedBeaconBlock::Bellatrix(b) => b.as_ssz_bytes(),
            VersionedBlindedBeaconBlock::Capella(b) => b.as_ssz_bytes(),
        },
        SignPayload::AggregateAndProof(aggregate) => aggregate.as_ssz_bytes(),
        SignPayload::VoluntaryExit(exit) => exit.as_ssz_bytes(),
        SignPayload::Slot(slot) => slot.as_ssz_bytes(),
        SignPayload::Epoch(epoch) => epoch.as_ssz_bytes(),
        SignPayload::SyncCommitteeMessage(root) => root.as_slice().to_vec(),
        SignPayload::SyncAggregatorSelectionData(data) => data.as_ssz_bytes(),
        SignPayload::ContributionAndProof(contribution) => contribution.as_ssz_bytes(),
        SignPayload::ValidatorRegistration(VersionedValidatorRegistration::V1(registration)) => {
            registration.as_ssz_bytes()
        }
    }
}

/// Decode `data` as the schema selected by `kind` and `version`.
fn decode_payload(kind: ObjectType, version: u64, data: &[u8]) -> CodecResult<SignPayload> {
    let unsupported = || CodecError::UnsupportedVersion {
        object_type: kind,
        version,
    };

    let payload = match kind {
        ObjectType::BeaconBlock => {
            let block = match DataVersion::from_u64(version).ok_or_else(unsupported)? {
                DataVersion::Phase0 => {
                    VersionedBeaconBlock::Phase0(BeaconBlockPhase0::from_ssz_bytes(data)?)
                }
                DataVersion::Altair => {
                    VersionedBeaconBlock::Altair(BeaconBlockAltair::from_ssz_bytes(data)?)
                }
                DataVersion::Bellatrix => {
                    VersionedBeaconBlock::Bellatrix(BeaconBlockBellatrix::from_ssz_bytes(data)?)
                }
                DataVersion::Capella => {
                    VersionedBeaconBlock::Capella(BeaconBlockCapella::from_ssz_bytes(data)?)
                }
            };
            SignPayload::BeaconBlock(block)
        }
        ObjectType::BlindedBeaconBlock => {
            let block = match DataVersion::from_u64(version).ok_or_else(unsupported)? {
                DataVersion::Bellatrix => VersionedBlindedBeaconBlock::Bellatrix(
                    BlindedBeaconBlockBellatrix::from_ssz_bytes(data)?,
                ),
                DataVersion::Capella => VersionedBlindedBeaconBlock::Capella(
                    BlindedBeaconBlockCapella::from_ssz_bytes(data)?,
                ),
                DataVersion::Phase0 | DataVersion::Altair => return Err(unsupported()),
            };
            SignPayload::BlindedBeaconBlock(block)
        }
        ObjectType::ValidatorRegistration => {
            match BuilderVersion::from_u64(version).ok_or_else(unsupported)? {
                BuilderVersion::V1 => SignPayload::ValidatorRegistration(
                    VersionedValidatorRegistration::V1(ValidatorRegistration::from_ssz_bytes(
                        data,
                    )?),
                ),
            }
        }
        unversioned => {
            if version != 0 {
                return Err(unsupported());
            }
            decode_unversioned(unversioned, data)?
        }
    };
    Ok(payload)
}

fn decode_unversioned(kind: ObjectType, data: &[u8]) -> CodecResult<SignPayload> {
    Ok(match kind {
        ObjectType::AttestationData => {
            SignPayload::AttestationData(AttestationData::from_ssz_bytes(data)?)
        }
        ObjectType::AggregateAndProof => {
            SignPayload::AggregateAndProof(AggregateAndProof::from_ssz_bytes(data)?)
        }
        ObjectType::VoluntaryExit => SignPayload::VoluntaryExit(VoluntaryExit::from_ssz_bytes(data)?),
        ObjectType::Slot => SignPayload::Slot(u64::from_ssz_bytes(data)?),
        ObjectType::Epoch => SignPayload::Epoch(u64::from_ssz_bytes(data)?),
        ObjectType::SyncCommitteeMessage => SignPayload::SyncCommitteeMessage(
            signer_types::root_from_slice(data).ok_or(CodecError::InvalidLength {
                field: "data",
                expected: 32,
                actual: data.len(),
            })?,
        ),
        ObjectType::SyncAggregatorSelectionData => SignPayload::SyncAggregatorSelectionData(
            SyncAggregatorSelectionData::from_ssz_bytes(data)?,
        ),
        ObjectType::ContributionAndProof => {
            SignPayload::ContributionAndProof(ContributionAndProof::from_ssz_bytes(data)?)
        }
        ObjectType::BeaconBlock
        | ObjectType::BlindedBeaconBlock
        | ObjectType::ValidatorRegistration => {
            return Err(CodecError::UnsupportedVersion {
                object_type: kind,
                version: 0,
            })
        }
    })
}

// =============================================================================
// Hex helpers
// =============================================================================

fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

fn decode_hex(field: &'static str, value: &str) -> CodecResult<Vec<u8>> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(stripped).map_err(|e| CodecError::Envelope(format!("{field}: {e}")))
}

fn decode_root(field: &'static str, value: &str) -> CodecResult<Root> {
    let bytes = decode_hex(field, value)?;
    signer_types::root_from_slice(&bytes).ok_or(CodecError::InvalidLength {
        field,
        expected: 32,
        actual: bytes.len(),
    })
}
