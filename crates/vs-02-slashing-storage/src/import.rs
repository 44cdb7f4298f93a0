//! # Bulk Import
//!
//! Two policies for loading an [`InMemorySnapshot`] into persistent storage:
//!
//! - **Replace**: wipe accounts, wallet and histories, then write the
//!   snapshot. Used to provision an entirely new key set.
//! - **Merge**: add snapshot accounts whose public key is not yet in the
//!   wallet, with their histories. Existing accounts keep their state.
//!
//! Neither policy is atomic: the store has no transactions, so a failure
//! part-way leaves a partially written namespace.

use std::collections::HashSet;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::records::Wallet;
use crate::domain::snapshot::{AccountSnapshot, InMemorySnapshot};
use crate::ports::outbound::KeyValueStore;
use crate::store::SignerStore;

/// Outcome of an import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Accounts written from the snapshot
    pub written: usize,
    /// Snapshot accounts left out
    pub skipped: usize,
    /// Pre-existing accounts deleted
    pub removed: usize,
}

/// Replace everything in the namespace with `snapshot`.
pub fn replace_from_snapshot<S: KeyValueStore>(
    store: &SignerStore<S>,
    snapshot: &InMemorySnapshot,
) -> StorageResult<ImportReport> {
    let wallet = validated_wallet(snapshot)?;

    let removed = store.clear_accounts()?;
    store.delete_wallet()?;
    let histories = store.clear_histories()?;
    debug!(
        "[vs-02] Cleared {} accounts and {} history records before replace",
        removed, histories
    );

    store.save_wallet(&wallet)?;
    for entry in &snapshot.accounts {
        let mut account = entry.account.clone();
        account.wallet_id = wallet.id;
        store.save_account(&account)?;
        copy_history(store, entry)?;
    }

    let report = ImportReport {
        written: snapshot.accounts.len(),
        skipped: 0,
        removed,
    };
    info!(
        "[vs-02] Replaced wallet with {} ({} accounts, {} removed)",
        wallet.name, report.written, report.removed
    );
    Ok(report)
}

/// Add accounts from `snapshot` whose public keys are new to the wallet.
///
/// First write wins by public key: an account already present keeps its
/// record and history even if the snapshot carries a different id or
/// newer history for it. A new key whose name is taken gets a numbered
/// name instead.
pub fn merge_from_snapshot<S: KeyValueStore>(
    store: &SignerStore<S>,
    snapshot: &InMemorySnapshot,
) -> StorageResult<ImportReport> {
    let mut wallet = match store.open_wallet() {
        Ok(wallet) => wallet,
        Err(StorageError::WalletNotFound) => {
            let wallet = snapshot.wallet.emptied();
            store.save_wallet(&wallet)?;
            info!("[vs-02] Created wallet {} for merge", wallet.name);
            wallet
        }
        Err(e) => return Err(e),
    };

    let mut report = ImportReport::default();
    for entry in &snapshot.accounts {
        let incoming = &entry.account;
        match store.account_by_public_key(&wallet, &incoming.public_key) {
            Ok(_) => {
                debug!("[vs-02] Merge keeps existing account for {}", incoming.public_key);
                report.skipped += 1;
                continue;
            }
            Err(StorageError::AccountNotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let mut account = incoming.clone();
        if wallet.accounts.contains_key(&account.name) {
            account.name = free_name(&wallet, &incoming.name);
            warn!(
                "[vs-02] Merge renames {}: account name {} taken, using {}",
                incoming.public_key, incoming.name, account.name
            );
        }
        match store.account(&account.id) {
            Ok(_) => account.id = Uuid::new_v4(),
            Err(StorageError::AccountNotFound(_)) => {}
            Err(e) => return Err(e),
        }
        store.add_account_to_wallet(&mut wallet, account)?;
        copy_history(store, entry)?;
        report.written += 1;
    }

    info!(
        "[vs-02] Merged snapshot into wallet {} ({} added, {} skipped)",
        wallet.name, report.written, report.skipped
    );
    Ok(report)
}

/// First `<name>-<n>` not yet used in `wallet`, counting from 2.
fn free_name(wallet: &Wallet, name: &str) -> String {
    (2u32..)
        .map(|n| format!("{name}-{n}"))
        .find(|candidate| !wallet.accounts.contains_key(candidate))
        .unwrap_or_else(|| format!("{name}-{}", Uuid::new_v4()))
}

fn copy_history<S: KeyValueStore>(
    store: &SignerStore<S>,
    entry: &AccountSnapshot,
) -> StorageResult<()> {
    let public_key = &entry.account.public_key;
    if let Some(attestation) = &entry.highest_attestation {
        store.save_highest_attestation(public_key, attestation)?;
    }
    if let Some(proposal) = &entry.highest_proposal {
        store.save_highest_proposal(public_key, proposal)?;
    }
    Ok(())
}

/// Snapshot wallet with its account map rebuilt from the account list.
/// Rejects duplicate names or keys before anything is deleted.
fn validated_wallet(snapshot: &InMemorySnapshot) -> StorageResult<Wallet> {
    let mut wallet = snapshot.wallet.emptied();
    let mut keys = HashSet::new();
    for entry in &snapshot.accounts {
        let account = &entry.account;
        if !keys.insert(account.public_key) {
            return Err(StorageError::InvalidArgument("duplicate public key in snapshot"));
        }
        if wallet
            .accounts
            .insert(account.name.clone(), account.id)
            .is_some()
        {
            return Err(StorageError::InvalidArgument("duplicate account name in snapshot"));
        }
    }
    Ok(wallet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryKVStore;
    use crate::domain::errors::KVStoreError;
    use signer_types::{BeaconBlockHeader, PublicKey, Root};

    fn header(slot: u64) -> BeaconBlockHeader {
        BeaconBlockHeader {
            slot,
            proposer_index: 1,
            parent_root: Root::from([1; 32]),
            state_root: Root::from([2; 32]),
            body_root: Root::from([3; 32]),
        }
    }

    fn snapshot(name: &str, keys: &[u8], slot: u64) -> InMemorySnapshot {
        let mut snapshot = InMemorySnapshot::new(name);
        for (i, byte) in keys.iter().enumerate() {
            snapshot
                .add_account(format!("validator-{i}"), PublicKey::new([*byte; 48]))
                .with_proposal(header(slot));
        }
        snapshot
    }

    #[test]
    fn test_replace_into_empty_store() {
        let store = SignerStore::new(InMemoryKVStore::new());
        let report = replace_from_snapshot(&store, &snapshot("a", &[1, 2], 10)).unwrap();
        assert_eq!(
            report,
            ImportReport {
                written: 2,
                skipped: 0,
                removed: 0
            }
        );

        let wallet = store.open_wallet().unwrap();
        assert_eq!(wallet.name, "a");
        let pk = PublicKey::new([2; 48]);
        store.account_by_public_key(&wallet, &pk).unwrap();
        assert_eq!(store.retrieve_highest_proposal(&pk).unwrap(), Some(header(10)));
    }

    #[test]
    fn test_replace_removes_previous_accounts_and_history() {
        let store = SignerStore::new(InMemoryKVStore::new());
        replace_from_snapshot(&store, &snapshot("a", &[1, 2], 10)).unwrap();

        let report = replace_from_snapshot(&store, &snapshot("b", &[3], 20)).unwrap();
        assert_eq!(report.removed, 2);

        let wallet = store.open_wallet().unwrap();
        assert_eq!(wallet.name, "b");
        let old = PublicKey::new([1; 48]);
        assert!(store.account_by_public_key(&wallet, &old).is_err());
        assert_eq!(store.retrieve_highest_proposal(&old).unwrap(), None);
        assert_eq!(store.list_accounts().unwrap().len(), 1);
    }

    #[test]
    fn test_replace_rejects_duplicate_keys_before_deleting() {
        let store = SignerStore::new(InMemoryKVStore::new());
        replace_from_snapshot(&store, &snapshot("a", &[1], 10)).unwrap();

        let bad = snapshot("b", &[5, 5], 10);
        assert!(matches!(
            replace_from_snapshot(&store, &bad).unwrap_err(),
            StorageError::InvalidArgument(_)
        ));
        assert_eq!(store.open_wallet().unwrap().name, "a");
    }

    #[test]
    fn test_merge_creates_missing_wallet() {
        let store = SignerStore::new(InMemoryKVStore::new());
        let source = snapshot("a", &[1], 10);
        let report = merge_from_snapshot(&store, &source).unwrap();
        assert_eq!(report.written, 1);
        assert_eq!(store.open_wallet().unwrap().id, source.wallet.id);
    }

    #[test]
    fn test_merge_keeps_existing_key_state() {
        let store = SignerStore::new(InMemoryKVStore::new());
        merge_from_snapshot(&store, &snapshot("a", &[1], 10)).unwrap();

        // Same key with newer history and a fresh account id, plus one new key.
        let mut incoming = InMemorySnapshot::new("b");
        incoming
            .add_account("renamed", PublicKey::new([1; 48]))
            .with_proposal(header(99));
        incoming
            .add_account("validator-9", PublicKey::new([9; 48]))
            .with_proposal(header(50));

        let report = merge_from_snapshot(&store, &incoming).unwrap();
        assert_eq!(
            report,
            ImportReport {
                written: 1,
                skipped: 1,
                removed: 0
            }
        );

        let existing = PublicKey::new([1; 48]);
        assert_eq!(store.retrieve_highest_proposal(&existing).unwrap(), Some(header(10)));
        let wallet = store.open_wallet().unwrap();
        assert_eq!(wallet.name, "a");
        assert_eq!(
            store.account_by_public_key(&wallet, &existing).unwrap().name,
            "validator-0"
        );
        assert_eq!(
            store.retrieve_highest_proposal(&PublicKey::new([9; 48])).unwrap(),
            Some(header(50))
        );
    }

    #[test]
    fn test_merge_renames_taken_account_name() {
        let store = SignerStore::new(InMemoryKVStore::new());
        merge_from_snapshot(&store, &snapshot("a", &[1], 10)).unwrap();
        merge_from_snapshot(&store, &snapshot("b", &[2], 10)).unwrap();

        // "validator-0" is taken by key 1 and then by key 2.
        let report = merge_from_snapshot(&store, &snapshot("c", &[3], 10)).unwrap();
        assert_eq!(report.written, 1);
        assert_eq!(report.skipped, 0);

        let wallet = store.open_wallet().unwrap();
        let names: Vec<_> = wallet.accounts.keys().cloned().collect();
        assert_eq!(names, ["validator-0", "validator-0-2", "validator-0-3"]);
        for byte in [1, 2, 3] {
            let pk = PublicKey::new([byte; 48]);
            assert_eq!(store.account_by_public_key(&wallet, &pk).unwrap().public_key, pk);
        }
        assert_eq!(
            store.retrieve_highest_proposal(&PublicKey::new([3; 48])).unwrap(),
            Some(header(10))
        );
    }

    /// Store whose reads fail once the flag is set.
    #[derive(Default)]
    struct FailingReads {
        inner: InMemoryKVStore,
        fail: std::sync::atomic::AtomicBool,
    }

    impl KeyValueStore for FailingReads {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
            if self.fail.load(std::sync::atomic::Ordering::SeqCst) && key.contains("/accounts/") {
                return Err(KVStoreError::IOError {
                    message: "read failed".into(),
                });
            }
            self.inner.get(key)
        }

        fn put(&self, key: &str, value: &[u8]) -> Result<(), KVStoreError> {
            self.inner.put(key, value)
        }

        fn delete(&self, key: &str) -> Result<(), KVStoreError> {
            self.inner.delete(key)
        }

        fn list(&self, prefix: &str) -> Result<Vec<String>, KVStoreError> {
            self.inner.list(prefix)
        }
    }

    #[test]
    fn test_merge_propagates_account_read_failure() {
        let store = SignerStore::new(FailingReads::default());
        store.save_wallet(&Wallet::new("empty")).unwrap();
        store.backend().fail.store(true, std::sync::atomic::Ordering::SeqCst);

        let err = merge_from_snapshot(&store, &snapshot("b", &[2], 10)).unwrap_err();
        assert!(matches!(err, StorageError::Backend { .. }));
    }
}
