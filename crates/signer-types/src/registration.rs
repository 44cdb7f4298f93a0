//! Builder API validator registration.

use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::primitives::{BlsPublicKeyBytes, ExecutionAddress};

#[derive(Debug, Clone, PartialEq, Encode, Decode, TreeHash)]
pub struct ValidatorRegistration {
    pub fee_recipient: ExecutionAddress,
    pub gas_limit: u64,
    pub timestamp: u64,
    pub pubkey: BlsPublicKeyBytes,
}

/// Builder API schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuilderVersion {
    V1 = 0,
}

impl BuilderVersion {
    pub fn as_u64(self) -> u64 {
        self as u64
    }

    pub fn from_u64(value: u64) -> Option<Self> {
        match value {
            0 => Some(Self::V1),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum VersionedValidatorRegistration {
    V1(ValidatorRegistration),
}

impl VersionedValidatorRegistration {
    pub fn version(&self) -> BuilderVersion {
        match self {
            Self::V1(_) => BuilderVersion::V1,
        }
    }
}
