//! Concrete implementations of the outbound ports.

pub mod bls_signer;
pub mod protector;

pub use bls_signer::BlsSigner;
pub use protector::HighestRecordProtector;
