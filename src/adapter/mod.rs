//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - the `bitredict` command line
//! - [`outbound`] - guided-market backend over HTTP and the EVM wallet

pub mod inbound;
pub mod outbound;
