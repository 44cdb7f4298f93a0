//! # vs-03-signing-coordinator
//!
//! Signing coordinator for the validator signer.
//!
//! ## Overview
//!
//! A request for one validator key runs, on the caller's thread:
//!
//! - **Decode**: envelope bytes through the configured [`WireFormat`](vs_01_envelope_codec::WireFormat)
//! - **Exclusion**: in-process [`KeyedMutexArena`], then the storage lock record
//! - **Check**: the [`SlashingProtector`] against the stored highest record
//! - **Sign**: the external [`Signer`]
//! - **Persist**: the new highest attestation or proposal
//!
//! A second request for a key already in flight fails fast with
//! [`SigningError::Locked`]. Keys do not contend with each other.
//!
//! ## Architecture
//!
//! ```text
//! SigningApi ──→ SigningService ──→ Codec (vs-01)
//!                     │  ├────────→ SignerStore (vs-02) ──→ KeyValueStore
//!                     │  ├────────→ SlashingProtector ──→ HighestRecordProtector
//!                     │  └────────→ Signer ──→ BlsSigner
//!                     └── KeyedMutexArena
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use vs_03_signing_coordinator::*;
//! use vs_02_slashing_storage::InMemoryKVStore;
//!
//! let signer = BlsSigner::new();
//! let public_key = signer.import_key_material(&ikm)?;
//! let service = SigningService::new(
//!     CoordinatorConfig::from_env(),
//!     InMemoryKVStore::new(),
//!     HighestRecordProtector::new(),
//!     signer,
//! );
//! let response = service.sign_bytes(&request_bytes)?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::{BlsSigner, HighestRecordProtector};
pub use config::CoordinatorConfig;
pub use domain::{KeyedMutexArena, SlashingReason};
pub use error::{ErrorKind, SigningError, SigningResult};
pub use ports::inbound::{SignResponse, SigningApi};
pub use ports::outbound::{Signer, SignerError, SlashingProtector};
pub use service::SigningService;
