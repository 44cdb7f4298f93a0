//! # Primitive Consensus Types
//!
//! Scalar aliases and SSZ re-exports used by every payload type.

use ssz_types::typenum::{U20, U32, U4, U48, U96};

// Re-export SSZ traits to avoid users having to depend on these directly
pub use ssz::{Decode, DecodeError, Encode};
pub use ssz_types::{typenum, BitList, BitVector, FixedVector, VariableList};
pub use tree_hash::{Hash256, TreeHash};

/// 32-byte hash tree root.
pub type Root = Hash256;

/// 32-byte signature domain mixed into every signing root.
pub type Domain = Hash256;

pub type Slot = u64;
pub type Epoch = u64;
pub type ValidatorIndex = u64;
pub type CommitteeIndex = u64;
pub type Gwei = u64;

/// Compressed BLS public key as it appears inside SSZ containers.
pub type BlsPublicKeyBytes = FixedVector<u8, U48>;

/// Compressed BLS signature as it appears inside SSZ containers.
pub type BlsSignatureBytes = FixedVector<u8, U96>;

/// 20-byte execution layer address.
pub type ExecutionAddress = FixedVector<u8, U20>;

/// Fork version.
pub type Version = FixedVector<u8, U4>;

/// Little-endian uint256 (base fee per gas).
pub type Uint256Bytes = FixedVector<u8, U32>;

/// Build a root from a byte slice, returning `None` on a length mismatch.
pub fn root_from_slice(bytes: &[u8]) -> Option<Root> {
    let array: [u8; 32] = bytes.try_into().ok()?;
    Some(Root::from(array))
}
