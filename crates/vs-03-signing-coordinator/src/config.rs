//! Coordinator configuration.
//!
//! Defaults are overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `VS_WIRE_FORMAT` | `wire_format` (`current`/`ssz`, `legacy`/`proto`) |
//! | `VS_LOCK_WAIT_MS` | `contention_timeout` (`0` = fail fast) |
//! | `VS_STORAGE_NAMESPACE` | `storage_namespace` |
//! | `VS_VERIFY_SIGNING_ROOT` | `verify_signing_root` (`true`/`false`) |

use std::time::Duration;

use tracing::warn;
use vs_01_envelope_codec::WireFormat;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinatorConfig {
    /// Format `sign_bytes` decodes
    pub wire_format: WireFormat,
    /// How long a request waits for a key already in flight. `None` fails fast.
    pub contention_timeout: Option<Duration>,
    /// Prefix for every storage key
    pub storage_namespace: String,
    /// Reject envelopes whose precomputed signing root disagrees with ours
    pub verify_signing_root: bool,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            wire_format: WireFormat::Current,
            contention_timeout: None,
            storage_namespace: String::new(),
            verify_signing_root: true,
        }
    }
}

impl CoordinatorConfig {
    /// Defaults with process environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults with overrides from `lookup`. Unparseable values are logged
    /// and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(format) = lookup("VS_WIRE_FORMAT") {
            match format.parse() {
                Ok(parsed) => config.wire_format = parsed,
                Err(e) => warn!("[vs-03] Ignoring VS_WIRE_FORMAT: {}", e),
            }
        }
        if let Some(wait) = lookup("VS_LOCK_WAIT_MS") {
            match wait.trim().parse::<u64>() {
                Ok(0) => config.contention_timeout = None,
                Ok(ms) => config.contention_timeout = Some(Duration::from_millis(ms)),
                Err(_) => warn!("[vs-03] Ignoring VS_LOCK_WAIT_MS: {:?} is not a number", wait),
            }
        }
        if let Some(namespace) = lookup("VS_STORAGE_NAMESPACE") {
            config.storage_namespace = namespace;
        }
        if let Some(verify) = lookup("VS_VERIFY_SIGNING_ROOT") {
            match verify.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => config.verify_signing_root = true,
                "false" | "0" | "no" => config.verify_signing_root = false,
                other => warn!("[vs-03] Ignoring VS_VERIFY_SIGNING_ROOT: {:?}", other),
            }
        }

        config
    }
}
