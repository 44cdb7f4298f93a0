//! # Sign Request Envelope
//!
//! The unit of work handed to the signing coordinator. Created per request
//! and never persisted.

use crate::keys::PublicKey;
use crate::payload::SignPayload;
use crate::primitives::{Domain, Root};

#[derive(Debug, Clone, PartialEq)]
pub struct SignRequestEnvelope {
    /// Key of the validator being asked to sign.
    pub public_key: PublicKey,
    /// Signing root precomputed by the client, if it sent one.
    pub signing_root: Option<Root>,
    pub signature_domain: Domain,
    /// `None` only for envelopes that never had a payload set.
    pub payload: Option<SignPayload>,
}

impl SignRequestEnvelope {
    pub fn new(public_key: PublicKey, signature_domain: Domain, payload: SignPayload) -> Self {
        Self {
            public_key,
            signing_root: None,
            signature_domain,
            payload: Some(payload),
        }
    }

    pub fn with_signing_root(mut self, signing_root: Root) -> Self {
        self.signing_root = Some(signing_root);
        self
    }
}
