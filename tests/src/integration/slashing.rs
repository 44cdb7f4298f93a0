//! # Slashing Protection Through the Service
//!
//! Re-signing identical attestations, double and surround votes, and strict
//! proposal slot monotonicity, all against persisted highest records.

#[cfg(test)]
mod tests {
    use signer_types::{SignPayload, VersionedBeaconBlock, VersionedBlindedBeaconBlock};
    use vs_01_envelope_codec::fixtures;
    use vs_03_signing_coordinator::{BlsSigner, ErrorKind, SigningApi, SlashingReason};

    use crate::harness::{attestation, attestation_data, domain, request, SignerHarness};

    #[test]
    fn test_attestation_scenario() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);
        let first = attestation(284115, 77, 78, 0x02);

        let signed = harness.service.sign(&request(pk, first.clone()))?;
        assert!(BlsSigner::verify(&pk, &domain(), &first.object_root(), &signed.signature));

        let again = harness.service.sign(&request(pk, first))?;
        assert_eq!(again.signature, signed.signature);

        let conflicting = attestation(284115, 77, 78, 0x03);
        let err = harness.service.sign(&request(pk, conflicting)).unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::DoubleVote));
        assert_eq!(err.to_string(), "DoubleVote");

        assert_eq!(
            harness.service.store().retrieve_highest_attestation(&pk)?,
            Some(attestation_data(284115, 77, 78, 0x02))
        );
        Ok(())
    }

    #[test]
    fn test_surrounding_vote_rejected() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        harness.service.sign(&request(pk, attestation(2496, 77, 78, 0x02)))?;
        let err = harness
            .service
            .sign(&request(pk, attestation(2560, 77, 80, 0x02)))
            .unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::SurroundingVote));
        Ok(())
    }

    #[test]
    fn test_surrounded_vote_rejected() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        harness.service.sign(&request(pk, attestation(288000, 8878, 9000, 0x02)))?;
        let err = harness
            .service
            .sign(&request(pk, attestation(284832, 8900, 8901, 0x02)))
            .unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::SurroundedVote));
        Ok(())
    }

    #[test]
    fn test_lower_vote_cannot_hide_double_vote() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        harness.service.sign(&request(pk, attestation(2496, 77, 78, 0x02)))?;
        let lower = harness
            .service
            .sign(&request(pk, attestation(2400, 70, 75, 0x02)))
            .unwrap_err();
        assert_eq!(lower.slashing_reason(), Some(SlashingReason::SurroundedVote));

        let conflicting = harness
            .service
            .sign(&request(pk, attestation(2496, 77, 78, 0x03)))
            .unwrap_err();
        assert_eq!(conflicting.slashing_reason(), Some(SlashingReason::DoubleVote));
        assert_eq!(
            harness.service.store().retrieve_highest_attestation(&pk)?,
            Some(attestation_data(2496, 77, 78, 0x02))
        );
        Ok(())
    }

    #[test]
    fn test_advancing_votes_accepted() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);
        for target in 78..82 {
            harness
                .service
                .sign(&request(pk, attestation(target * 32, target - 1, target, 0x02)))?;
        }
        assert_eq!(
            harness
                .service
                .store()
                .retrieve_highest_attestation(&pk)?
                .map(|data| data.target.epoch),
            Some(81)
        );
        Ok(())
    }

    #[test]
    fn test_proposal_requires_higher_slot() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);
        let block = fixtures::phase0_block_payload(100);

        harness.service.sign(&request(pk, block.clone()))?;

        for payload in [block, fixtures::phase0_block_payload(99)] {
            let err = harness.service.sign(&request(pk, payload)).unwrap_err();
            assert_eq!(err.slashing_reason(), Some(SlashingReason::HighestProposalVote));
        }
        harness.service.sign(&request(pk, fixtures::phase0_block_payload(101)))?;
        Ok(())
    }

    #[test]
    fn test_blinded_and_full_blocks_share_history() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        let full = SignPayload::BeaconBlock(VersionedBeaconBlock::Bellatrix(
            fixtures::bellatrix_block(20),
        ));
        harness.service.sign(&request(pk, full))?;

        let blinded = SignPayload::BlindedBeaconBlock(VersionedBlindedBeaconBlock::Bellatrix(
            fixtures::blinded_bellatrix_block(20),
        ));
        let err = harness.service.sign(&request(pk, blinded)).unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::HighestProposalVote));

        let next = SignPayload::BlindedBeaconBlock(VersionedBlindedBeaconBlock::Capella(
            fixtures::blinded_capella_block(21),
        ));
        harness.service.sign(&request(pk, next))?;
        Ok(())
    }

    #[test]
    fn test_rejections_are_per_key() -> anyhow::Result<()> {
        let harness = SignerHarness::new(2)?;
        harness
            .service
            .sign(&request(harness.key(0), attestation(2496, 77, 78, 0x02)))?;
        harness
            .service
            .sign(&request(harness.key(1), attestation(2496, 77, 78, 0x03)))?;
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_not_slashing() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let stranger = BlsSigner::new().import_key_material(&[0xee; 32])?;
        let err = harness
            .service
            .sign(&request(stranger, attestation(2496, 77, 78, 0x02)))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.slashing_reason(), None);
        Ok(())
    }
}
