//! Wallet and account records.

use signer_types::PublicKey;
use tracing::{debug, warn};
use uuid::Uuid;

use super::SignerStore;
use crate::domain::errors::{StorageError, StorageResult};
use crate::domain::records::{ValidatorAccount, Wallet};
use crate::ports::outbound::KeyValueStore;

impl<S: KeyValueStore> SignerStore<S> {
    /// Load the namespace's wallet.
    pub fn open_wallet(&self) -> StorageResult<Wallet> {
        self.read_json("open_wallet", "wallet", &self.keys.wallet())?
            .ok_or(StorageError::WalletNotFound)
    }

    pub fn save_wallet(&self, wallet: &Wallet) -> StorageResult<()> {
        if wallet.name.is_empty() {
            return Err(StorageError::InvalidArgument("wallet name"));
        }
        self.write_json("save_wallet", "wallet", &self.keys.wallet(), wallet)
    }

    pub fn delete_wallet(&self) -> StorageResult<()> {
        self.delete_key("delete_wallet", &self.keys.wallet())
    }

    pub fn save_account(&self, account: &ValidatorAccount) -> StorageResult<()> {
        if account.public_key.is_zero() {
            return Err(StorageError::InvalidArgument("account public key"));
        }
        self.write_json(
            "save_account",
            "account",
            &self.keys.account(&account.id),
            account,
        )
    }

    pub fn account(&self, id: &Uuid) -> StorageResult<ValidatorAccount> {
        self.read_json("account", "account", &self.keys.account(id))?
            .ok_or_else(|| StorageError::AccountNotFound(id.to_string()))
    }

    pub fn delete_account(&self, id: &Uuid) -> StorageResult<()> {
        self.delete_key("delete_account", &self.keys.account(id))
    }

    /// Delete every account record in the namespace, wallet membership or not.
    pub fn clear_accounts(&self) -> StorageResult<usize> {
        self.delete_prefix("clear_accounts", &self.keys.accounts_prefix())
    }

    /// Every stored account, ordered by key.
    pub fn list_accounts(&self) -> StorageResult<Vec<ValidatorAccount>> {
        let keys = self
            .kv
            .list(&self.keys.accounts_prefix())
            .map_err(StorageError::backend("list_accounts"))?;

        let mut accounts = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(account) = self.read_json("list_accounts", "account", &key)? {
                accounts.push(account);
            }
        }
        Ok(accounts)
    }

    /// Resolve a member of `wallet` by public key.
    pub fn account_by_public_key(
        &self,
        wallet: &Wallet,
        public_key: &PublicKey,
    ) -> StorageResult<ValidatorAccount> {
        for (name, id) in &wallet.accounts {
            let key = self.keys.account(id);
            match self.read_json::<ValidatorAccount>("account_by_public_key", "account", &key)? {
                Some(account) if account.public_key == *public_key => return Ok(account),
                Some(_) => {}
                None => warn!("[vs-02] Wallet lists account {} ({}) with no record", name, id),
            }
        }
        Err(StorageError::AccountNotFound(public_key.to_hex()))
    }

    /// Store `account` and register it in `wallet`.
    ///
    /// The account is written before the wallet so a failure never leaves
    /// the wallet pointing at a missing record.
    pub fn add_account_to_wallet(
        &self,
        wallet: &mut Wallet,
        mut account: ValidatorAccount,
    ) -> StorageResult<ValidatorAccount> {
        if account.name.is_empty() {
            return Err(StorageError::InvalidArgument("account name"));
        }
        if wallet.accounts.contains_key(&account.name) {
            return Err(StorageError::InvalidArgument("account name already in wallet"));
        }

        account.wallet_id = wallet.id;
        self.save_account(&account)?;
        wallet.accounts.insert(account.name.clone(), account.id);
        self.save_wallet(wallet)?;

        debug!(
            "[vs-02] Added account {} ({}) to wallet {}",
            account.name, account.public_key, wallet.name
        );
        Ok(account)
    }
}
