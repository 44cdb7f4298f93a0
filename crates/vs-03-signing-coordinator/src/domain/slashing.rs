//! # Slashing Rules
//!
//! Decisions against a single stored "highest" record per key.
//!
//! ## Attestations
//!
//! 1. Double vote: same target epoch as the stored record, different content
//! 2. Surrounding vote: source at or before the stored source, target after
//!    the stored target
//! 3. Surrounded vote: target before the stored target
//!
//! Rule 3 also covers votes lying wholly below the stored record. Only the
//! highest vote is kept, so a lower vote could replace it and hide a later
//! conflict with it.
//!
//! Content identical to the stored record may be signed again.
//!
//! ## Proposals
//!
//! The slot must be strictly greater than the stored slot. Identical content
//! is not special-cased.
//!
//! No stored record means there is nothing to compare against: permitted.

use signer_types::{AttestationData, BeaconBlockHeader};
use thiserror::Error;

/// Reason a request was refused as slashable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SlashingReason {
    #[error("DoubleVote")]
    DoubleVote,
    #[error("SurroundingVote")]
    SurroundingVote,
    #[error("SurroundedVote")]
    SurroundedVote,
    #[error("HighestProposalVote")]
    HighestProposalVote,
}

pub fn check_attestation(
    highest: Option<&AttestationData>,
    candidate: &AttestationData,
) -> Result<(), SlashingReason> {
    let Some(highest) = highest else {
        return Ok(());
    };
    if highest == candidate {
        return Ok(());
    }

    let (source, target) = (candidate.source.epoch, candidate.target.epoch);
    let (stored_source, stored_target) = (highest.source.epoch, highest.target.epoch);

    if target == stored_target {
        return Err(SlashingReason::DoubleVote);
    }
    if source <= stored_source && target > stored_target {
        return Err(SlashingReason::SurroundingVote);
    }
    if target < stored_target {
        return Err(SlashingReason::SurroundedVote);
    }
    Ok(())
}

pub fn check_proposal(
    highest: Option<&BeaconBlockHeader>,
    candidate: &BeaconBlockHeader,
) -> Result<(), SlashingReason> {
    match highest {
        Some(highest) if candidate.slot <= highest.slot => Err(SlashingReason::HighestProposalVote),
        _ => Ok(()),
    }
}
