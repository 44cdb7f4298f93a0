//! Slashing protector over the single stored highest record.

use signer_types::{AttestationData, BeaconBlockHeader, PublicKey};
use tracing::warn;

use crate::domain::slashing::{self, SlashingReason};
use crate::ports::outbound::SlashingProtector;

/// Applies the double, surround and highest-proposal rules against the
/// record the coordinator retrieved. An absent record permits.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighestRecordProtector;

impl HighestRecordProtector {
    pub fn new() -> Self {
        Self
    }
}

impl SlashingProtector for HighestRecordProtector {
    fn check_attestation(
        &self,
        public_key: &PublicKey,
        highest: Option<&AttestationData>,
        candidate: &AttestationData,
    ) -> Result<(), SlashingReason> {
        slashing::check_attestation(highest, candidate).inspect_err(|reason| {
            warn!(
                "[vs-03] Refusing attestation for {} (source {}, target {}): {}",
                public_key, candidate.source.epoch, candidate.target.epoch, reason
            );
        })
    }

    fn check_proposal(
        &self,
        public_key: &PublicKey,
        highest: Option<&BeaconBlockHeader>,
        candidate: &BeaconBlockHeader,
    ) -> Result<(), SlashingReason> {
        slashing::check_proposal(highest, candidate).inspect_err(|reason| {
            warn!(
                "[vs-03] Refusing proposal for {} at slot {}: {}",
                public_key, candidate.slot, reason
            );
        })
    }
}
