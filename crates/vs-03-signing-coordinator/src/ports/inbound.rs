//! Driving Ports (API - Inbound)

use serde::{Serialize, Serializer};
use signer_types::{PublicKey, Root, Signature, SignRequestEnvelope};

use crate::error::SigningResult;

/// Successful signing outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    pub public_key: PublicKey,
    /// Root the signature covers.
    #[serde(serialize_with = "serialize_root")]
    pub signing_root: Root,
    pub signature: Signature,
}

fn serialize_root<S: Serializer>(root: &Root, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", hex::encode(root.as_slice())))
}

/// Signing API
///
/// Every call runs decode → lock → check → sign → persist → unlock on the
/// caller's thread. A second call for a key already in flight fails fast.
pub trait SigningApi: Send + Sync {
    /// Sign a decoded envelope.
    fn sign(&self, envelope: &SignRequestEnvelope) -> SigningResult<SignResponse>;

    /// Decode `bytes` in the configured wire format, then sign.
    fn sign_bytes(&self, bytes: &[u8]) -> SigningResult<SignResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_hex() {
        let response = SignResponse {
            public_key: PublicKey::new([0xaa; 48]),
            signing_root: Root::from([0x01; 32]),
            signature: Signature::new([0xbb; 96]),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["signingRoot"], format!("0x{}", "01".repeat(32)));
        assert!(json["publicKey"].as_str().unwrap().ends_with(&"aa".repeat(48)));
        assert!(json["signature"].as_str().unwrap().ends_with(&"bb".repeat(96)));
    }
}
