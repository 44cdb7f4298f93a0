//! Ports for the storage layer.

pub mod outbound;
