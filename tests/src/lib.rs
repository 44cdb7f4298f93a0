//! # Validator-Signer Test Suite
//!
//! Cross-crate tests for the signing path.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # Provisioned service + request builders
//! └── integration/
//!     ├── codec_round_trip.rs   # Both wire formats, every payload
//!     ├── concurrency.rs        # Same-key contention
//!     ├── slashing.rs           # Re-sign, double, surround, proposals
//!     ├── import.rs             # Replace and merge
//!     └── persistence.rs        # History across RocksDB reopen
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p vs-tests
//! RUST_LOG=debug cargo test -p vs-tests integration::slashing
//! ```

pub mod harness;
pub mod integration;
