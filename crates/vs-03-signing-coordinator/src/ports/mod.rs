//! Ports for the signing coordinator.

pub mod inbound;
pub mod outbound;
