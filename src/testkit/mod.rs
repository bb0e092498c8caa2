//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`chain`]: [`ScriptedChain`](chain::ScriptedChain), a wallet signer and
//!   chain reader with queued outcomes.
//! - [`backend`]: [`ScriptedBackend`](backend::ScriptedBackend), a
//!   guided-market backend with queued responses.
//! - [`status`]: [`RecordingSink`](status::RecordingSink) for status events.
//! - [`domain`]: Builders for requests and prepared transactions.

pub mod backend;
pub mod chain;
pub mod domain;
pub mod status;
