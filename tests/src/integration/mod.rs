//! Cross-crate integration tests.

mod codec_round_trip;
mod concurrency;
mod import;
mod persistence;
mod slashing;
