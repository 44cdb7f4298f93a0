//! # Signing Service
//!
//! Ties the codec, the storage adapter, the protector and the signer
//! together behind [`SigningApi`].
//!
//! ## Flow
//!
//! ```text
//! decode → key mutex → acquire_lock → open_wallet → account_by_public_key
//!        → retrieve highest → protector → signer → save highest → release_lock
//! ```
//!
//! `release_lock` runs on every path once `acquire_lock` succeeded.

use signer_types::{
    compute_signing_root, AttestationData, BeaconBlockHeader, PublicKey, Root, SignPayload,
    SignRequestEnvelope, Signature,
};
use tracing::{debug, warn};
use vs_01_envelope_codec::{codec_for, Codec};
use vs_02_slashing_storage::{KeyValueStore, SignerStore, ValidatorAccount};

use crate::config::CoordinatorConfig;
use crate::domain::key_mutex::{self, KeyedMutexArena};
use crate::error::{SigningError, SigningResult};
use crate::ports::inbound::{SignResponse, SigningApi};
use crate::ports::outbound::{SlashingProtector, Signer};

pub struct SigningService<S, P, G>
where
    S: KeyValueStore,
    P: SlashingProtector,
    G: Signer,
{
    store: SignerStore<S>,
    protector: P,
    signer: G,
    codec: Box<dyn Codec>,
    mutexes: KeyedMutexArena,
    config: CoordinatorConfig,
}

impl<S, P, G> SigningService<S, P, G>
where
    S: KeyValueStore,
    P: SlashingProtector,
    G: Signer,
{
    pub fn new(config: CoordinatorConfig, kv: S, protector: P, signer: G) -> Self {
        Self {
            store: SignerStore::with_namespace(kv, &config.storage_namespace),
            protector,
            signer,
            codec: codec_for(config.wire_format),
            mutexes: KeyedMutexArena::new(),
            config,
        }
    }

    /// Storage adapter, for provisioning and import.
    pub fn store(&self) -> &SignerStore<S> {
        &self.store
    }

    pub fn signer(&self) -> &G {
        &self.signer
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Everything between acquire and release.
    fn sign_locked(
        &self,
        public_key: &PublicKey,
        domain: &Root,
        payload: &SignPayload,
        object_root: &Root,
    ) -> SigningResult<Signature> {
        let wallet = self
            .store
            .open_wallet()
            .map_err(SigningError::storage("open_wallet"))?;
        let account = self
            .store
            .account_by_public_key(&wallet, public_key)
            .map_err(SigningError::storage("account_by_public_key"))?;

        match payload {
            SignPayload::AttestationData(data) => {
                self.sign_attestation(&account, domain, data, object_root)
            }
            SignPayload::BeaconBlock(_) | SignPayload::BlindedBeaconBlock(_) => {
                let header = payload
                    .proposal_header()
                    .ok_or_else(|| SigningError::InvalidRequest("block without header".into()))?;
                self.sign_proposal(&account, domain, &header, object_root)
            }
            _ => Ok(self.signer.sign(&account, domain, object_root)?),
        }
    }

    fn sign_attestation(
        &self,
        account: &ValidatorAccount,
        domain: &Root,
        data: &AttestationData,
        object_root: &Root,
    ) -> SigningResult<Signature> {
        let public_key = &account.public_key;
        let highest = self
            .store
            .retrieve_highest_attestation(public_key)
            .map_err(SigningError::storage("retrieve_highest_attestation"))?;
        self.protector
            .check_attestation(public_key, highest.as_ref(), data)?;

        let signature = self.signer.sign(account, domain, object_root)?;
        self.store
            .save_highest_attestation(public_key, data)
            .map_err(SigningError::storage("save_highest_attestation"))?;
        Ok(signature)
    }

    fn sign_proposal(
        &self,
        account: &ValidatorAccount,
        domain: &Root,
        header: &BeaconBlockHeader,
        object_root: &Root,
    ) -> SigningResult<Signature> {
        let public_key = &account.public_key;
        let highest = self
            .store
            .retrieve_highest_proposal(public_key)
            .map_err(SigningError::storage("retrieve_highest_proposal"))?;
        self.protector
            .check_proposal(public_key, highest.as_ref(), header)?;

        let signature = self.signer.sign(account, domain, object_root)?;
        self.store
            .save_highest_proposal(public_key, header)
            .map_err(SigningError::storage("save_highest_proposal"))?;
        Ok(signature)
    }
}

impl<S, P, G> SigningApi for SigningService<S, P, G>
where
    S: KeyValueStore,
    P: SlashingProtector,
    G: Signer,
{
    fn sign(&self, envelope: &SignRequestEnvelope) -> SigningResult<SignResponse> {
        let public_key = envelope.public_key;
        if public_key.is_zero() {
            return Err(SigningError::InvalidRequest("empty public key".into()));
        }
        let payload = envelope
            .payload
            .as_ref()
            .ok_or_else(|| SigningError::InvalidRequest("envelope has no payload".into()))?;

        let object_root = payload.object_root();
        let signing_root = compute_signing_root(object_root, envelope.signature_domain);
        if self.config.verify_signing_root {
            if let Some(claimed) = envelope.signing_root {
                if claimed != signing_root {
                    return Err(SigningError::InvalidRequest(format!(
                        "signing root mismatch for {}",
                        payload.object_type()
                    )));
                }
            }
        }

        let handle = self.mutexes.handle(&public_key);
        let Some(_guard) = key_mutex::try_lock(&handle, self.config.contention_timeout) else {
            debug!("[vs-03] {} already in flight", public_key);
            return Err(SigningError::Locked(public_key.to_hex()));
        };

        self.store
            .acquire_lock(&public_key)
            .map_err(SigningError::storage("acquire_lock"))?;

        let signed = self.sign_locked(
            &public_key,
            &envelope.signature_domain,
            payload,
            &object_root,
        );
        let released = self.store.release_lock(&public_key);

        let signature = match (signed, released) {
            (Ok(signature), Ok(())) => signature,
            (Ok(_), Err(source)) => {
                warn!("[vs-03] Signed for {} but lock release failed: {}", public_key, source);
                return Err(SigningError::Storage {
                    operation: "release_lock",
                    source,
                });
            }
            (Err(e), released) => {
                if let Err(release_error) = released {
                    warn!(
                        "[vs-03] Lock release failed for {} after error: {}",
                        public_key, release_error
                    );
                }
                debug!("[vs-03] Refused {} for {}: {}", payload.object_type(), public_key, e);
                return Err(e);
            }
        };

        debug!("[vs-03] Signed {} for {}", payload.object_type(), public_key);
        Ok(SignResponse {
            public_key,
            signing_root,
            signature,
        })
    }

    fn sign_bytes(&self, bytes: &[u8]) -> SigningResult<SignResponse> {
        let envelope = self.codec.decode(bytes)?;
        self.sign(&envelope)
    }
}
