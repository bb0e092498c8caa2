//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the external collaborators of market creation:
//! the guided-market backend, the wallet, the chain, the signing prompt, and
//! whoever listens to progress events.

pub mod backend;
pub mod chain;
pub mod prompt;
pub mod status;
