//! Backend port for market preparation and indexing.
//!
//! The backend turns a creation request into a ready-to-sign transaction and,
//! once that transaction is mined, records the new market in its index.

use alloy_primitives::TxHash;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::market::{MarketCreationRequest, MarketKind};
use crate::domain::transaction::{MarketDetails, PreparedTransaction};

/// Failures talking to the backend.
///
/// The display text is what ends up in user-facing error strings, so each
/// variant renders the underlying message verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a non-2xx status.
    #[error("API Error ({status}): {body}")]
    Status { status: u16, body: String },

    /// The request never got a response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// The response did not describe a usable transaction.
    #[error("invalid prepared transaction: {0}")]
    InvalidPayload(String),
}

/// Port for the guided-market backend.
///
/// One network call per method, no retries.
#[async_trait]
pub trait MarketBackend: Send + Sync {
    /// Obtain a validated transaction descriptor for `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend is unreachable, rejects the
    /// request, or returns a payload that fails validation.
    async fn prepare(
        &self,
        request: &MarketCreationRequest,
    ) -> Result<PreparedTransaction, BackendError>;

    /// Register a mined market with the backend index.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend is unreachable or rejects
    /// the confirmation.
    async fn confirm(
        &self,
        kind: MarketKind,
        transaction_hash: TxHash,
        details: &MarketDetails,
    ) -> Result<(), BackendError>;
}
