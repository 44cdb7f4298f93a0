//! # Durable History
//!
//! Highest records and provisioned accounts outlive the service on the
//! RocksDB backend.

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use vs_02_slashing_storage::{
        replace_from_snapshot, InMemorySnapshot, RocksDbConfig, RocksDbStore,
    };
    use vs_03_signing_coordinator::{
        BlsSigner, CoordinatorConfig, HighestRecordProtector, SigningApi, SigningService,
        SlashingReason,
    };

    use crate::harness::{attestation, init_tracing, key_material, request, Service};

    fn open(dir: &TempDir, signer: BlsSigner) -> anyhow::Result<Service<RocksDbStore>> {
        let path = dir.path().to_string_lossy().into_owned();
        let kv = RocksDbStore::open(RocksDbConfig::for_testing(path))?;
        Ok(SigningService::new(
            CoordinatorConfig::default(),
            kv,
            HighestRecordProtector::new(),
            signer,
        ))
    }

    #[test]
    fn test_history_survives_reopen() -> anyhow::Result<()> {
        init_tracing();
        let dir = TempDir::new()?;

        let signer = BlsSigner::new();
        let pk = signer.import_key_material(&key_material(0))?;
        let service = open(&dir, signer)?;
        let mut snapshot = InMemorySnapshot::new("durable");
        snapshot.add_account("validator-0", pk);
        replace_from_snapshot(service.store(), &snapshot)?;
        let signed = service.sign(&request(pk, attestation(2496, 77, 78, 0x02)))?;
        drop(service);

        let signer = BlsSigner::new();
        signer.import_key_material(&key_material(0))?;
        let service = open(&dir, signer)?;

        let again = service.sign(&request(pk, attestation(2496, 77, 78, 0x02)))?;
        assert_eq!(again.signature, signed.signature);
        let err = service
            .sign(&request(pk, attestation(2496, 77, 78, 0x03)))
            .unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::DoubleVote));
        assert!(!service.store().is_locked(&pk)?);
        Ok(())
    }

    #[test]
    fn test_namespaces_are_isolated() -> anyhow::Result<()> {
        init_tracing();
        let dir = TempDir::new()?;
        let path = dir.path().to_string_lossy().into_owned();
        let kv = std::sync::Arc::new(RocksDbStore::open(RocksDbConfig::for_testing(path))?);

        let mut services = Vec::new();
        let mut keys = Vec::new();
        for tenant in ["tenant-a", "tenant-b"] {
            let signer = BlsSigner::new();
            let pk = signer.import_key_material(&key_material(0))?;
            let config = CoordinatorConfig {
                storage_namespace: tenant.to_string(),
                ..CoordinatorConfig::default()
            };
            let service = SigningService::new(
                config,
                std::sync::Arc::clone(&kv),
                HighestRecordProtector::new(),
                signer,
            );
            let mut snapshot = InMemorySnapshot::new(tenant);
            snapshot.add_account("validator-0", pk);
            replace_from_snapshot(service.store(), &snapshot)?;
            services.push(service);
            keys.push(pk);
        }

        services[0].sign(&request(keys[0], attestation(2496, 77, 78, 0x02)))?;
        services[1].sign(&request(keys[1], attestation(2496, 77, 78, 0x03)))?;
        assert_eq!(services[1].store().open_wallet()?.name, "tenant-b");
        Ok(())
    }
}
