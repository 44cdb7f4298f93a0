//! # BLS Signer
//!
//! In-memory BLS12-381 keystore. Public keys are 48-byte compressed G1
//! points and signatures 96-byte compressed G2 points (the `min_pk`
//! variant used by the beacon chain).
//!
//! Signing is deterministic: the same key, domain and object root always
//! produce the same signature.

use std::collections::HashMap;

use blst::min_pk::SecretKey;
use parking_lot::RwLock;
use signer_types::{compute_signing_root, Domain, PublicKey, Root, Signature};
use tracing::debug;
use vs_02_slashing_storage::ValidatorAccount;

use crate::ports::outbound::{Signer, SignerError};

/// Domain separation tag for proof-of-possession BLS signatures.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

#[derive(Default)]
pub struct BlsSigner {
    keys: RwLock<HashMap<PublicKey, SecretKey>>,
}

impl BlsSigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a secret key from at least 32 bytes of key material and hold
    /// it. Returns the matching public key.
    pub fn import_key_material(&self, ikm: &[u8]) -> Result<PublicKey, SignerError> {
        let secret = SecretKey::key_gen(ikm, &[])
            .map_err(|e| SignerError::InvalidKey(format!("{:?}", e)))?;
        Ok(self.insert(secret))
    }

    /// Hold a 32-byte big-endian secret scalar. Returns its public key.
    pub fn import_secret_key(&self, bytes: &[u8]) -> Result<PublicKey, SignerError> {
        let secret = SecretKey::from_bytes(bytes)
            .map_err(|e| SignerError::InvalidKey(format!("{:?}", e)))?;
        Ok(self.insert(secret))
    }

    pub fn contains(&self, public_key: &PublicKey) -> bool {
        self.keys.read().contains_key(public_key)
    }

    /// Check `signature` over the signing root of `object_root` in `domain`.
    pub fn verify(
        public_key: &PublicKey,
        domain: &Domain,
        object_root: &Root,
        signature: &Signature,
    ) -> bool {
        let Ok(pk) = blst::min_pk::PublicKey::from_bytes(public_key.as_bytes()) else {
            return false;
        };
        let Ok(sig) = blst::min_pk::Signature::from_bytes(signature.as_bytes()) else {
            return false;
        };
        let signing_root = compute_signing_root(*object_root, *domain);
        sig.verify(true, signing_root.as_slice(), DST, &[], &pk, true)
            == blst::BLST_ERROR::BLST_SUCCESS
    }

    fn insert(&self, secret: SecretKey) -> PublicKey {
        let public_key = PublicKey::new(secret.sk_to_pk().to_bytes());
        self.keys.write().insert(public_key, secret);
        debug!("[vs-03] Holding signing key {}", public_key);
        public_key
    }
}

impl Signer for BlsSigner {
    fn sign(
        &self,
        account: &ValidatorAccount,
        domain: &Domain,
        object_root: &Root,
    ) -> Result<Signature, SignerError> {
        let keys = self.keys.read();
        let secret = keys
            .get(&account.public_key)
            .ok_or_else(|| SignerError::UnknownKey(account.public_key.to_hex()))?;
        let signing_root = compute_signing_root(*object_root, *domain);
        let signature = secret.sign(signing_root.as_slice(), DST, &[]);
        Ok(Signature::new(signature.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_02_slashing_storage::Wallet;

    fn signer_with_key() -> (BlsSigner, ValidatorAccount) {
        let signer = BlsSigner::new();
        let pk = signer.import_key_material(&[7; 32]).unwrap();
        let account = ValidatorAccount::new(&Wallet::new("main"), "validator-0", pk);
        (signer, account)
    }

    #[test]
    fn test_signature_verifies() {
        let (signer, account) = signer_with_key();
        let domain = Root::from([0x0d; 32]);
        let object_root = Root::from([0x42; 32]);

        let signature = signer.sign(&account, &domain, &object_root).unwrap();
        assert!(BlsSigner::verify(&account.public_key, &domain, &object_root, &signature));
        assert!(!BlsSigner::verify(
            &account.public_key,
            &Root::from([0x0e; 32]),
            &object_root,
            &signature
        ));
    }

    #[test]
    fn test_signing_is_deterministic() {
        let (signer, account) = signer_with_key();
        let domain = Root::from([0x0d; 32]);
        let object_root = Root::from([0x42; 32]);
        assert_eq!(
            signer.sign(&account, &domain, &object_root).unwrap(),
            signer.sign(&account, &domain, &object_root).unwrap()
        );
    }

    #[test]
    fn test_same_material_same_key() {
        let a = BlsSigner::new().import_key_material(&[9; 32]).unwrap();
        let b = BlsSigner::new().import_key_material(&[9; 32]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_key() {
        let signer = BlsSigner::new();
        let account =
            ValidatorAccount::new(&Wallet::new("main"), "validator-0", PublicKey::new([1; 48]));
        assert!(matches!(
            signer.sign(&account, &Root::ZERO, &Root::ZERO),
            Err(SignerError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_short_key_material_rejected() {
        assert!(matches!(
            BlsSigner::new().import_key_material(&[1; 8]),
            Err(SignerError::InvalidKey(_))
        ));
    }
}
