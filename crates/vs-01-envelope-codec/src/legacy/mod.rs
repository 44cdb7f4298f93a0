//! # Legacy Wire Format
//!
//! Protocol Buffers encoding used by older clients. Fields 1-3 carry the key,
//! the optional signing root and the domain; one oneof field per payload
//! variant sits at 101-110. There is no version tag, so each variant maps
//! to exactly one schema generation.
//!
//! | Tag | Payload |
//! |-----|---------|
//! | 101 | AttestationData |
//! | 102 | BeaconBlock (phase 0) |
//! | 103 | AggregateAndProof |
//! | 104 | VoluntaryExit |
//! | 105 | Slot |
//! | 106 | Epoch |
//! | 107 | SyncCommitteeMessage (block root) |
//! | 108 | SyncAggregatorSelectionData |
//! | 109 | ContributionAndProof |
//! | 110 | BeaconBlock (altair) |
//!
//! Unknown fields are skipped on decode.

mod convert;
pub mod proto;

use prost::Message;
use signer_types::{ObjectType, PublicKey, SignPayload, SignRequestEnvelope, VersionedBeaconBlock};

use self::proto::sign_request::Object;
use crate::error::{CodecError, CodecResult};
use crate::{Codec, WireFormat};

/// Codec for the legacy protobuf format.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyProtoCodec;

impl Codec for LegacyProtoCodec {
    fn format(&self) -> WireFormat {
        WireFormat::Legacy
    }

    fn encode(&self, envelope: &SignRequestEnvelope) -> CodecResult<Vec<u8>> {
        let object = envelope.payload.as_ref().map(to_object).transpose()?;
        let request = proto::SignRequest {
            public_key: envelope.public_key.as_bytes().to_vec(),
            signing_root: envelope
                .signing_root
                .map(|root| root.to_vec())
                .unwrap_or_default(),
            signature_domain: envelope.signature_domain.to_vec(),
            object,
        };
        Ok(request.encode_to_vec())
    }

    fn decode(&self, bytes: &[u8]) -> CodecResult<SignRequestEnvelope> {
        let request = proto::SignRequest::decode(bytes)?;

        let public_key =
            PublicKey::from_slice(&request.public_key).map_err(|_| CodecError::InvalidLength {
                field: "public_key",
                expected: PublicKey::LEN,
                actual: request.public_key.len(),
            })?;
        let signing_root = if request.signing_root.is_empty() {
            None
        } else {
            Some(convert::root("signing_root", &request.signing_root)?)
        };
        let signature_domain = convert::root("signature_domain", &request.signature_domain)?;
        let payload = request.object.map(from_object).transpose()?;

        Ok(SignRequestEnvelope {
            public_key,
            signing_root,
            signature_domain,
            payload,
        })
    }
}

fn to_object(payload: &SignPayload) -> CodecResult<Object> {
    let object = match payload {
        SignPayload::AttestationData(data) => Object::AttestationData(data.into()),
        SignPayload::BeaconBlock(VersionedBeaconBlock::Phase0(block)) => Object::Block(block.into()),
        SignPayload::BeaconBlock(VersionedBeaconBlock::Altair(block)) => {
            Object::BlockV2(block.into())
        }
        SignPayload::BeaconBlock(block) => {
            return Err(CodecError::UnsupportedVariant {
                object_type: ObjectType::BeaconBlock,
                version: block.version().as_u64(),
            })
        }
        SignPayload::BlindedBeaconBlock(block) => {
            return Err(CodecError::UnsupportedVariant {
                object_type: ObjectType::BlindedBeaconBlock,
                version: block.version().as_u64(),
            })
        }
        SignPayload::ValidatorRegistration(registration) => {
            return Err(CodecError::UnsupportedVariant {
                object_type: ObjectType::ValidatorRegistration,
                version: registration.version().as_u64(),
            })
        }
        SignPayload::AggregateAndProof(aggregate) => {
            Object::AggregateAttestationAndProof(aggregate.into())
        }
        SignPayload::VoluntaryExit(exit) => Object::Exit(exit.into()),
        SignPayload::Slot(slot) => Object::Slot(*slot),
        SignPayload::Epoch(epoch) => Object::Epoch(*epoch),
        SignPayload::SyncCommitteeMessage(root) => Object::SyncCommitteeMessage(root.to_vec()),
        SignPayload::SyncAggregatorSelectionData(data) => {
            Object::SyncAggregatorSelectionData(data.into())
        }
        SignPayload::ContributionAndProof(contribution) => {
            Object::ContributionAndProof(contribution.into())
        }
    };
    Ok(object)
}

fn from_object(object: Object) -> CodecResult<SignPayload> {
    let payload = match object {
        Object::AttestationData(data) => SignPayload::AttestationData(data.try_into()?),
        Object::Block(block) => {
            SignPayload::BeaconBlock(VersionedBeaconBlock::Phase0(block.try_into()?))
        }
        Object::BlockV2(block) => {
            SignPayload::BeaconBlock(VersionedBeaconBlock::Altair(block.try_into()?))
        }
        Object::AggregateAttestationAndProof(aggregate) => {
            SignPayload::AggregateAndProof(aggregate.try_into()?)
        }
        Object::Exit(exit) => SignPayload::VoluntaryExit(exit.into()),
        Object::Slot(slot) => SignPayload::Slot(slot),
        Object::Epoch(epoch) => SignPayload::Epoch(epoch),
        Object::SyncCommitteeMessage(root) => {
            SignPayload::SyncCommitteeMessage(convert::root("sync_committee_message", &root)?)
        }
        Object::SyncAggregatorSelectionData(data) => {
            SignPayload::SyncAggregatorSelectionData(data.into())
        }
        Object::ContributionAndProof(contribution) => {
            SignPayload::ContributionAndProof(contribution.try_into()?)
        }
    };
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use signer_types::Root;

    fn codec() -> LegacyProtoCodec {
        LegacyProtoCodec
    }

    /// Append a length-delimited field with an unregistered tag.
    fn append_unknown_field(bytes: &mut Vec<u8>, tag: u32, value: &[u8]) {
        prost::encoding::encode_key(tag, prost::encoding::WireType::LengthDelimited, bytes);
        prost::encoding::encode_varint(value.len() as u64, bytes);
        bytes.extend_from_slice(value);
    }

    #[test]
    fn test_round_trip_every_legacy_variant() {
        for payload in fixtures::legacy_payloads() {
            let envelope = fixtures::envelope(payload).with_signing_root(Root::from([7u8; 32]));
            let bytes = codec().encode(&envelope).unwrap();
            assert_eq!(codec().decode(&bytes).unwrap(), envelope);
        }
    }

    #[test]
    fn test_variants_without_legacy_shape_fail_to_encode() {
        for payload in fixtures::current_only_payloads() {
            let kind = payload.object_type();
            let err = codec().encode(&fixtures::envelope(payload)).unwrap_err();
            assert!(
                matches!(err, CodecError::UnsupportedVariant { object_type, .. } if object_type == kind)
            );
        }
    }

    #[test]
    fn test_field_numbers_are_fixed() {
        let envelope = fixtures::envelope(SignPayload::Slot(5));
        let bytes = codec().encode(&envelope).unwrap();
        // Field 1, length-delimited, 48 bytes.
        assert_eq!(&bytes[..2], &[0x0a, 48]);
        // Field 105 as varint: key = (105 << 3) | 0 = 840 = 0xc8 0x06.
        let tail = &bytes[bytes.len() - 3..];
        assert_eq!(tail, &[0xc8, 0x06, 5]);
    }

    #[test]
    fn test_missing_signing_root_is_none() {
        let envelope = fixtures::envelope(SignPayload::Epoch(4));
        let decoded = codec().decode(&codec().encode(&envelope).unwrap()).unwrap();
        assert_eq!(decoded.signing_root, None);
    }

    #[test]
    fn test_empty_payload_round_trip() {
        let mut envelope = fixtures::envelope(SignPayload::Epoch(4));
        envelope.payload = None;
        let decoded = codec().decode(&codec().encode(&envelope).unwrap()).unwrap();
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn test_unknown_fields_are_skipped() {
        let envelope = fixtures::envelope(fixtures::attestation_payload(10, 1, 2));
        let mut bytes = codec().encode(&envelope).unwrap();
        append_unknown_field(&mut bytes, 4, b"future");
        append_unknown_field(&mut bytes, 199, b"newer payload");
        assert_eq!(codec().decode(&bytes).unwrap(), envelope);
    }

    #[test]
    fn test_truncated_buffer_rejected() {
        let envelope = fixtures::envelope(fixtures::attestation_payload(10, 1, 2));
        let bytes = codec().encode(&envelope).unwrap();
        let err = codec().decode(&bytes[..bytes.len() - 4]).unwrap_err();
        assert!(matches!(err, CodecError::Legacy(_)));
    }

    #[test]
    fn test_overrunning_length_rejected() {
        // Field 1 declares 200 bytes but only 3 follow.
        let bytes = [0x0a, 0xc8, 0x01, 1, 2, 3];
        assert!(matches!(
            codec().decode(&bytes).unwrap_err(),
            CodecError::Legacy(_)
        ));
    }

    #[test]
    fn test_varint_overflow_rejected() {
        // Field 105 followed by an eleven-byte varint.
        let mut bytes = vec![0xc8, 0x06];
        bytes.extend_from_slice(&[0xff; 10]);
        bytes.push(0x01);
        assert!(matches!(
            codec().decode(&bytes).unwrap_err(),
            CodecError::Legacy(_)
        ));
    }

    #[test]
    fn test_missing_checkpoint_rejected() {
        let request = proto::SignRequest {
            public_key: vec![1; 48],
            signing_root: Vec::new(),
            signature_domain: vec![2; 32],
            object: Some(Object::AttestationData(proto::AttestationData {
                slot: 1,
                committee_index: 0,
                beacon_block_root: vec![3; 32],
                source: None,
                target: None,
            })),
        };
        let err = codec().decode(&request.encode_to_vec()).unwrap_err();
        assert!(matches!(err, CodecError::MissingField("attestation_data.source")));
    }

    #[test]
    fn test_short_root_rejected() {
        let request = proto::SignRequest {
            public_key: vec![1; 48],
            signing_root: vec![9; 31],
            signature_domain: vec![2; 32],
            object: Some(Object::Epoch(1)),
        };
        let err = codec().decode(&request.encode_to_vec()).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidLength {
                field: "signing_root",
                expected: 32,
                actual: 31
            }
        ));
    }
}
