//! Operator-facing inbound ports consumed by CLI adapters.

pub mod configuration;
pub mod creation;
pub mod port;
pub mod wallet;
