//! Shared setup for the integration tests.

use std::sync::Once;

use anyhow::Context;
use signer_types::{
    AttestationData, Checkpoint, PublicKey, Root, SignPayload, SignRequestEnvelope,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vs_02_slashing_storage::{
    replace_from_snapshot, InMemoryKVStore, InMemorySnapshot, KeyValueStore,
};
use vs_03_signing_coordinator::{
    BlsSigner, CoordinatorConfig, HighestRecordProtector, SigningService,
};

pub type Service<S> = SigningService<S, HighestRecordProtector, BlsSigner>;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test writer, filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn domain() -> Root {
    Root::from([0x0d; 32])
}

/// Deterministic key material for validator `index`.
pub fn key_material(index: u8) -> [u8; 32] {
    [index.wrapping_add(1); 32]
}

/// A signing service with `validators` keys provisioned in one wallet.
pub struct SignerHarness<S: KeyValueStore = InMemoryKVStore> {
    pub service: Service<S>,
    pub keys: Vec<PublicKey>,
}

impl SignerHarness<InMemoryKVStore> {
    pub fn new(validators: u8) -> anyhow::Result<Self> {
        Self::with_store(InMemoryKVStore::new(), CoordinatorConfig::default(), validators)
    }
}

impl<S: KeyValueStore> SignerHarness<S> {
    pub fn with_store(kv: S, config: CoordinatorConfig, validators: u8) -> anyhow::Result<Self> {
        init_tracing();

        let signer = BlsSigner::new();
        let mut snapshot = InMemorySnapshot::new("integration");
        let mut keys = Vec::with_capacity(validators as usize);
        for index in 0..validators {
            let public_key = signer
                .import_key_material(&key_material(index))
                .context("importing key material")?;
            snapshot.add_account(format!("validator-{}", index), public_key);
            keys.push(public_key);
        }

        let service = SigningService::new(config, kv, HighestRecordProtector::new(), signer);
        replace_from_snapshot(service.store(), &snapshot).context("provisioning wallet")?;
        info!("[vs-tests] Provisioned {} validators", validators);
        Ok(Self { service, keys })
    }

    pub fn key(&self, index: usize) -> PublicKey {
        self.keys[index]
    }
}

pub fn attestation_data(slot: u64, source: u64, target: u64, target_root: u8) -> AttestationData {
    AttestationData {
        slot,
        index: 1,
        beacon_block_root: Root::from([0x01; 32]),
        source: Checkpoint {
            epoch: source,
            root: Root::from([0x02; 32]),
        },
        target: Checkpoint {
            epoch: target,
            root: Root::from([target_root; 32]),
        },
    }
}

pub fn attestation(slot: u64, source: u64, target: u64, target_root: u8) -> SignPayload {
    SignPayload::AttestationData(attestation_data(slot, source, target, target_root))
}

pub fn request(public_key: PublicKey, payload: SignPayload) -> SignRequestEnvelope {
    SignRequestEnvelope::new(public_key, domain(), payload)
}
