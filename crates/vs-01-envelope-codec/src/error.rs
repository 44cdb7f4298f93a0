//! Error types for the envelope codec

use signer_types::primitives::DecodeError;
use signer_types::ObjectType;
use thiserror::Error;

/// Malformed-input failures of either wire format.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Current format carried an object type tag nobody registered
    #[error("Unknown object type: {0:?}")]
    UnknownObjectType(String),

    /// Object type is known but the payload version is not
    #[error("Unsupported version {version} for {object_type}")]
    UnsupportedVersion { object_type: ObjectType, version: u64 },

    /// Payload bytes do not match the schema selected by tag and version
    #[error("SSZ decode failed: {0:?}")]
    Ssz(DecodeError),

    /// Outer record is not valid JSON or a byte field is not valid hex
    #[error("Malformed envelope: {0}")]
    Envelope(String),

    /// Payload has no schema in the target format
    #[error("{object_type} (version {version}) cannot be encoded in this format")]
    UnsupportedVariant { object_type: ObjectType, version: u64 },

    /// Required sub-message was absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Fixed-size byte field had the wrong length
    #[error("Invalid length for {field}: expected {expected}, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Bounded list exceeded its maximum
    #[error("Too many items in {field}: max {max}, got {actual}")]
    TooManyItems {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Legacy wire-level failure: bad varint, truncation, overrunning length
    #[error("Legacy wire format: {0}")]
    Legacy(#[from] prost::DecodeError),
}

impl From<DecodeError> for CodecError {
    fn from(err: DecodeError) -> Self {
        Self::Ssz(err)
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Envelope(err.to_string())
    }
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
