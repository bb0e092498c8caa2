//! Market creation use-case for operator-facing adapters.

use std::sync::Arc;

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::market::MarketCreationRequest;
use crate::domain::outcome::CreationOutcome;
use crate::error::Result;
use crate::port::outbound::prompt::SigningPrompt;
use crate::port::outbound::status::StatusSink;

/// Result of one guided creation attempt.
#[derive(Debug, Clone)]
pub struct CreationReport {
    /// Account the transactions were sent from.
    pub account: Address,
    pub outcome: CreationOutcome,
    /// Block explorer link for the pool transaction, once one was mined.
    pub explorer_url: Option<String>,
}

/// Guided market creation for operator-facing adapters.
#[async_trait]
pub trait CreationOperator: Send + Sync {
    /// Prepare, approve if needed, send and confirm one market.
    ///
    /// # Arguments
    ///
    /// * `config_toml` - Raw TOML configuration content.
    /// * `request` - Market to create.
    /// * `prompt` - Asked before each signature; `None` signs without asking.
    /// * `status` - Receives progress events in order.
    ///
    /// # Errors
    ///
    /// Returns an error only if the configuration or wallet cannot be set
    /// up. Failures during creation are reported in the outcome.
    async fn create_market(
        &self,
        config_toml: &str,
        request: &MarketCreationRequest,
        prompt: Option<Arc<dyn SigningPrompt>>,
        status: &dyn StatusSink,
    ) -> Result<CreationReport>;
}
