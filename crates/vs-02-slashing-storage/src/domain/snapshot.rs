//! # In-Memory Snapshot
//!
//! An externally supplied key set: one wallet, its accounts and each
//! account's highest attestation and proposal. Input to bulk import.
//!
//! Serialized as JSON; history records are hex-encoded SSZ.

use serde::{Deserialize, Serialize};
use signer_types::{AttestationData, BeaconBlockHeader, PublicKey};

use super::errors::{StorageError, StorageResult};
use super::records::{ValidatorAccount, Wallet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account: ValidatorAccount,
    #[serde(default, with = "ssz_hex")]
    pub highest_attestation: Option<AttestationData>,
    #[serde(default, with = "ssz_hex")]
    pub highest_proposal: Option<BeaconBlockHeader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InMemorySnapshot {
    /// Wallet record. Its `accounts` map mirrors `accounts`.
    pub wallet: Wallet,
    #[serde(default)]
    pub accounts: Vec<AccountSnapshot>,
}

impl InMemorySnapshot {
    pub fn new(wallet_name: impl Into<String>) -> Self {
        Self {
            wallet: Wallet::new(wallet_name),
            accounts: Vec::new(),
        }
    }

    /// Register a new account in the snapshot wallet.
    pub fn add_account(
        &mut self,
        name: impl Into<String>,
        public_key: PublicKey,
    ) -> &mut AccountSnapshot {
        let account = ValidatorAccount::new(&self.wallet, name, public_key);
        self.wallet.accounts.insert(account.name.clone(), account.id);
        self.accounts.push(AccountSnapshot {
            account,
            highest_attestation: None,
            highest_proposal: None,
        });
        let last = self.accounts.len() - 1;
        &mut self.accounts[last]
    }

    pub fn account(&self, public_key: &PublicKey) -> Option<&AccountSnapshot> {
        self.accounts
            .iter()
            .find(|entry| entry.account.public_key == *public_key)
    }

    pub fn account_mut(&mut self, public_key: &PublicKey) -> Option<&mut AccountSnapshot> {
        self.accounts
            .iter_mut()
            .find(|entry| entry.account.public_key == *public_key)
    }

    pub fn to_json(&self) -> StorageResult<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| StorageError::Serialization {
            record: "snapshot",
            message: e.to_string(),
        })
    }

    pub fn from_json(bytes: &[u8]) -> StorageResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| StorageError::Serialization {
            record: "snapshot",
            message: e.to_string(),
        })
    }
}

impl AccountSnapshot {
    pub fn with_attestation(&mut self, data: AttestationData) -> &mut Self {
        self.highest_attestation = Some(data);
        self
    }

    pub fn with_proposal(&mut self, header: BeaconBlockHeader) -> &mut Self {
        self.highest_proposal = Some(header);
        self
    }
}

/// `Option<T>` as `"0x<ssz hex>"` or `null`.
mod ssz_hex {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use signer_types::primitives::{Decode, Encode};

    pub fn serialize<T: Encode, S: Serializer>(
        value: &Option<T>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(record) => {
                serializer.serialize_some(&format!("0x{}", hex::encode(record.as_ssz_bytes())))
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T: Decode, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<T>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|encoded| {
            let stripped = encoded.strip_prefix("0x").unwrap_or(&encoded);
            let bytes = hex::decode(stripped).map_err(de::Error::custom)?;
            T::from_ssz_bytes(&bytes).map_err(|e| de::Error::custom(format!("invalid SSZ: {e:?}")))
        })
        .transpose()
    }
}
