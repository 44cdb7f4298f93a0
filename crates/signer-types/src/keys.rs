//! # Key and Signature Newtypes
//!
//! Fixed-size BLS public keys (48 bytes) and signatures (96 bytes).
//! Both render as lowercase hex and (de)serialize as `0x`-prefixed hex strings.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::BytesError;

macro_rules! fixed_bytes_newtype {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Length in bytes.
            pub const LEN: usize = $len;

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            /// Build from a slice, rejecting any other length.
            pub fn from_slice(bytes: &[u8]) -> Result<Self, BytesError> {
                let array: [u8; $len] = bytes.try_into().map_err(|_| BytesError::InvalidLength {
                    expected: $len,
                    actual: bytes.len(),
                })?;
                Ok(Self(array))
            }

            /// Parse hex with or without a `0x` prefix.
            pub fn from_hex(s: &str) -> Result<Self, BytesError> {
                let stripped = s.strip_prefix("0x").unwrap_or(s);
                let bytes = hex::decode(stripped).map_err(|e| BytesError::InvalidHex(e.to_string()))?;
                Self::from_slice(&bytes)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// `true` for the all-zero value, which stands in for "unset".
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(|byte| *byte == 0)
            }

            /// Lowercase hex without prefix.
            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(0x{}..)", stringify!($name), hex::encode(&self.0[..4]))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&format!("0x{}", self.to_hex()))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(de::Error::custom)
            }
        }
    };
}

fixed_bytes_newtype!(
    /// Compressed BLS12-381 public key (G1 point).
    PublicKey,
    48
);

fixed_bytes_newtype!(
    /// Compressed BLS12-381 signature (G2 point).
    Signature,
    96
);
