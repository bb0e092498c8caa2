//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for configuration, wallet
//!   management and market creation

pub mod operator;
