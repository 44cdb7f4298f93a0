//! # Bulk Import Through the Service
//!
//! Merge keeps what is already there; replace leaves nothing of the old key
//! set resolvable.

#[cfg(test)]
mod tests {
    use vs_02_slashing_storage::{merge_from_snapshot, replace_from_snapshot, InMemorySnapshot};
    use vs_03_signing_coordinator::{ErrorKind, SigningApi, SlashingReason};

    use crate::harness::{attestation, attestation_data, key_material, request, SignerHarness};

    #[test]
    fn test_merge_keeps_existing_account_and_history() -> anyhow::Result<()> {
        let harness = SignerHarness::new(2)?;
        let store = harness.service.store();
        let existing = harness.key(0);
        harness.service.sign(&request(existing, attestation(2496, 77, 78, 0x02)))?;
        let wallet = store.open_wallet()?;
        let before = store.account_by_public_key(&wallet, &existing)?;

        let newcomer = harness.service.signer().import_key_material(&key_material(40))?;
        let mut snapshot = InMemorySnapshot::new("incoming");
        snapshot
            .add_account("renamed-validator", existing)
            .with_attestation(attestation_data(3232, 100, 101, 0x02));
        snapshot.add_account("validator-40", newcomer);

        let report = merge_from_snapshot(store, &snapshot)?;
        assert_eq!((report.written, report.skipped), (1, 1));

        let wallet = store.open_wallet()?;
        assert_eq!(store.account_by_public_key(&wallet, &existing)?, before);
        assert_eq!(
            store.retrieve_highest_attestation(&existing)?,
            Some(attestation_data(2496, 77, 78, 0x02))
        );

        // The untouched history still guards the existing key.
        let err = harness
            .service
            .sign(&request(existing, attestation(2496, 77, 78, 0x09)))
            .unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::DoubleVote));

        harness.service.sign(&request(newcomer, attestation(2496, 77, 78, 0x02)))?;
        Ok(())
    }

    #[test]
    fn test_merge_copies_history_of_new_accounts() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let newcomer = harness.service.signer().import_key_material(&key_material(41))?;

        let mut snapshot = InMemorySnapshot::new("incoming");
        snapshot
            .add_account("validator-41", newcomer)
            .with_attestation(attestation_data(2496, 77, 78, 0x02));
        merge_from_snapshot(harness.service.store(), &snapshot)?;

        let err = harness
            .service
            .sign(&request(newcomer, attestation(2560, 77, 80, 0x02)))
            .unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::SurroundingVote));
        Ok(())
    }

    #[test]
    fn test_merge_adds_new_key_under_taken_name() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let store = harness.service.store();
        let newcomer = harness.service.signer().import_key_material(&key_material(42))?;

        let mut snapshot = InMemorySnapshot::new("second-batch");
        snapshot.add_account("validator-0", newcomer);
        let report = merge_from_snapshot(store, &snapshot)?;
        assert_eq!((report.written, report.skipped), (1, 0));

        let wallet = store.open_wallet()?;
        assert_eq!(store.account_by_public_key(&wallet, &newcomer)?.name, "validator-0-2");
        assert_eq!(store.account_by_public_key(&wallet, &harness.key(0))?.name, "validator-0");
        harness.service.sign(&request(newcomer, attestation(2496, 77, 78, 0x02)))?;
        Ok(())
    }

    #[test]
    fn test_replace_removes_previous_key_set() -> anyhow::Result<()> {
        let harness = SignerHarness::new(3)?;
        let store = harness.service.store();
        for pk in &harness.keys {
            harness.service.sign(&request(*pk, attestation(2496, 77, 78, 0x02)))?;
        }

        let replacement = harness.service.signer().import_key_material(&key_material(50))?;
        let mut snapshot = InMemorySnapshot::new("replacement");
        snapshot.add_account("validator-50", replacement);

        let report = replace_from_snapshot(store, &snapshot)?;
        assert_eq!((report.written, report.removed), (1, 3));

        let wallet = store.open_wallet()?;
        assert_eq!(wallet.name, "replacement");
        for pk in &harness.keys {
            assert!(store.account_by_public_key(&wallet, pk).is_err());
            assert_eq!(store.retrieve_highest_attestation(pk)?, None);
            let err = harness
                .service
                .sign(&request(*pk, attestation(2560, 79, 80, 0x02)))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotFound);
        }

        harness.service.sign(&request(replacement, attestation(2496, 77, 78, 0x02)))?;
        assert_eq!(store.list_accounts()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_snapshot_survives_json() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        let mut snapshot = InMemorySnapshot::new("exported");
        snapshot
            .add_account("validator-0", pk)
            .with_attestation(attestation_data(2496, 77, 78, 0x02));
        let decoded = InMemorySnapshot::from_json(&snapshot.to_json()?)?;
        assert_eq!(decoded, snapshot);

        replace_from_snapshot(harness.service.store(), &decoded)?;
        let err = harness
            .service
            .sign(&request(pk, attestation(2496, 77, 78, 0x03)))
            .unwrap_err();
        assert_eq!(err.slashing_reason(), Some(SlashingReason::DoubleVote));
        Ok(())
    }
}
