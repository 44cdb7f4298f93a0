//! Wallet and account records, persisted as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use signer_types::PublicKey;
use uuid::Uuid;

/// Named container of validator accounts. One per namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub id: Uuid,
    pub name: String,
    /// Account name → account id.
    #[serde(default)]
    pub accounts: BTreeMap<String, Uuid>,
}

impl Wallet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            accounts: BTreeMap::new(),
        }
    }

    /// Same identity, no accounts.
    pub fn emptied(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            accounts: BTreeMap::new(),
        }
    }
}

/// A validator key known to the signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorAccount {
    pub id: Uuid,
    pub name: String,
    pub public_key: PublicKey,
    pub wallet_id: Uuid,
}

impl ValidatorAccount {
    pub fn new(wallet: &Wallet, name: impl Into<String>, public_key: PublicKey) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            public_key,
            wallet_id: wallet.id,
        }
    }
}
