//! Domain layer: slashing rules and per-key exclusion.

pub mod key_mutex;
pub mod slashing;

pub use key_mutex::KeyedMutexArena;
pub use slashing::SlashingReason;
