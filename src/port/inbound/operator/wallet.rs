//! Wallet management projection types for operator-facing adapters.
//!
//! Amounts are raw token units (18 decimals); adapters format them.

use std::sync::Arc;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::port::outbound::prompt::SigningPrompt;
use crate::port::outbound::status::StatusSink;

/// Signer identity derived from the configured key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletIdentity {
    pub address: Address,
    pub chain_id: u64,
}

/// BITR holdings and the pool allowance of the configured account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletAllowanceStatus {
    pub wallet_address: Address,
    pub token: Address,
    /// Pool contract allowed to pull BITR.
    pub spender: Address,
    pub balance: U256,
    pub allowance: U256,
}

/// Outcome of a token approval operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// Approval transaction was mined.
    Approved {
        tx_hash: TxHash,
        amount: U256,
        /// Block explorer link for the transaction.
        explorer_url: String,
    },

    /// Sufficient approval already exists; nothing was sent.
    AlreadyApproved { current_allowance: U256 },
}

/// Wallet management use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait WalletOperator: Send + Sync {
    /// Retrieve the configured wallet address without touching the network.
    ///
    /// # Arguments
    ///
    /// * `config_toml` - Raw TOML configuration content.
    ///
    /// # Errors
    ///
    /// Returns an error if no wallet key is configured or it is malformed.
    fn wallet_address(&self, config_toml: &str) -> Result<WalletIdentity>;

    /// Read the BITR balance and pool allowance.
    ///
    /// # Arguments
    ///
    /// * `config_toml` - Raw TOML configuration content.
    ///
    /// # Errors
    ///
    /// Returns an error if the wallet is not configured or a read fails.
    async fn wallet_allowance(&self, config_toml: &str) -> Result<WalletAllowanceStatus>;

    /// Make sure the pool may spend at least `amount` whole BITR.
    ///
    /// # Arguments
    ///
    /// * `config_toml` - Raw TOML configuration content.
    /// * `amount` - Allowance in whole BITR; must be positive.
    /// * `prompt` - Asked before signing; `None` signs without asking.
    /// * `status` - Receives approval progress events.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is invalid, the wallet is not
    /// configured, or the approval fails.
    async fn wallet_approve(
        &self,
        config_toml: &str,
        amount: Decimal,
        prompt: Option<Arc<dyn SigningPrompt>>,
        status: &dyn StatusSink,
    ) -> Result<ApprovalOutcome>;
}
