//! # vs-01-envelope-codec
//!
//! Sign-request envelope codec.
//!
//! ## Overview
//!
//! Two independent wire formats carry the same logical [`SignRequestEnvelope`]:
//!
//! - **Current** ([`SszJsonCodec`]): a JSON record whose `data` field holds the
//!   SSZ bytes of one payload, selected by `objectType` and `version`.
//! - **Legacy** ([`LegacyProtoCodec`]): Protocol Buffers wire format with one
//!   oneof field (tags 101-110) per payload variant and no version tag.
//!
//! The caller picks the format; bytes are never sniffed.
//!
//! ```text
//! bytes ──decode──→ SignRequestEnvelope ──encode──→ bytes
//!          │                                  │
//!          └─── WireFormat::{Current, Legacy} ┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use vs_01_envelope_codec::{codec_for, WireFormat};
//!
//! let codec = codec_for(WireFormat::Current);
//! let bytes = codec.encode(&envelope)?;
//! assert_eq!(codec.decode(&bytes)?, envelope);
//! ```

pub mod current;
pub mod error;
pub mod legacy;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

use std::fmt;
use std::str::FromStr;

use signer_types::SignRequestEnvelope;

pub use current::SszJsonCodec;
pub use error::{CodecError, CodecResult};
pub use legacy::LegacyProtoCodec;

/// Wire format of a sign request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WireFormat {
    #[default]
    Current,
    Legacy,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" | "ssz" => Ok(Self::Current),
            "legacy" | "proto" => Ok(Self::Legacy),
            other => Err(format!("unknown wire format: {other}")),
        }
    }
}

/// Encoder/decoder for one wire format.
pub trait Codec: Send + Sync {
    fn format(&self) -> WireFormat;

    /// Encode an envelope. An envelope without a payload encodes to a record
    /// with no payload fields set.
    fn encode(&self, envelope: &SignRequestEnvelope) -> CodecResult<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> CodecResult<SignRequestEnvelope>;
}

/// Codec implementing `format`.
pub fn codec_for(format: WireFormat) -> Box<dyn Codec> {
    match format {
        WireFormat::Current => Box::new(SszJsonCodec),
        WireFormat::Legacy => Box::new(LegacyProtoCodec),
    }
}
