//! Operator implementations for inbound adapters.

pub mod config;
pub mod creation;
pub mod entry;
pub mod wallet;
