//! # Key Layout
//!
//! ```text
//! [<namespace>/]wallet
//! [<namespace>/]wallet/accounts/<uuid>
//! [<namespace>/]slashing/attestation/<hex pubkey>
//! [<namespace>/]slashing/proposal/<hex pubkey>
//! [<namespace>/]lock/<hex pubkey>
//! ```
//!
//! Public keys are lowercase hex of the raw 48 bytes, so the encoding is
//! fixed-width and collision-free. Each record kind has its own prefix, so
//! listing one kind never returns another.

use signer_types::PublicKey;
use uuid::Uuid;

const WALLET: &str = "wallet";
const ACCOUNTS: &str = "wallet/accounts/";
const ATTESTATIONS: &str = "slashing/attestation/";
const PROPOSALS: &str = "slashing/proposal/";
const LOCKS: &str = "lock/";

/// Key builder for one storage namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    /// Key space rooted at `namespace`. An empty namespace is the root.
    pub fn new(namespace: &str) -> Self {
        let trimmed = namespace.trim_matches('/');
        let prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        };
        Self { prefix }
    }

    pub fn wallet(&self) -> String {
        format!("{}{WALLET}", self.prefix)
    }

    pub fn accounts_prefix(&self) -> String {
        format!("{}{ACCOUNTS}", self.prefix)
    }

    pub fn account(&self, id: &Uuid) -> String {
        format!("{}{ACCOUNTS}{id}", self.prefix)
    }

    pub fn attestations_prefix(&self) -> String {
        format!("{}{ATTESTATIONS}", self.prefix)
    }

    pub fn attestation(&self, public_key: &PublicKey) -> String {
        format!("{}{ATTESTATIONS}{}", self.prefix, public_key.to_hex())
    }

    pub fn proposals_prefix(&self) -> String {
        format!("{}{PROPOSALS}", self.prefix)
    }

    pub fn proposal(&self, public_key: &PublicKey) -> String {
        format!("{}{PROPOSALS}{}", self.prefix, public_key.to_hex())
    }

    pub fn lock(&self, public_key: &PublicKey) -> String {
        format!("{}{LOCKS}{}", self.prefix, public_key.to_hex())
    }
}
