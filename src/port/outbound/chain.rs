//! Wallet and chain ports.
//!
//! [`WalletSigner`] submits contract calls on behalf of the connected account;
//! [`ChainReader`] reads state and waits for receipts. Both are passed around
//! explicitly so the creation flow can run against scripted implementations.

use std::fmt;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transaction::PoolCall;

/// Wallet and node failures, classified once by the adapter that sees them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The account holder declined to sign.
    #[error("user rejected the request: {0}")]
    UserRejected(String),

    /// The account cannot cover value plus fees, or the token transfer.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),

    /// Gas estimation or gas limit problems reported by the node.
    #[error("gas error: {0}")]
    Gas(String),

    /// The transaction was mined but did not succeed.
    #[error("transaction failed with status: {status}")]
    Reverted { status: ReceiptStatus },

    /// Anything else, with the node or transport message.
    #[error("{0}")]
    Other(String),
}

/// Final status recorded in a transaction receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Reverted => write!(f, "reverted"),
        }
    }
}

/// A state-changing call to submit through the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    /// ERC-20 `approve(spender, amount)` on `token`.
    Approve {
        token: Address,
        spender: Address,
        amount: U256,
    },
    /// A prepared pool call with attached value and gas limit.
    Pool {
        contract: Address,
        call: PoolCall,
        value: U256,
        gas_limit: u64,
    },
}

impl ContractCall {
    /// Contract the call is sent to.
    #[must_use]
    pub const fn target(&self) -> Address {
        match self {
            Self::Approve { token, .. } => *token,
            Self::Pool { contract, .. } => *contract,
        }
    }

    /// Solidity function name.
    #[must_use]
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::Approve { .. } => "approve",
            Self::Pool { call, .. } => call.function_name(),
        }
    }
}

/// Port for submitting transactions from the connected account.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// The account transactions are sent from.
    fn account(&self) -> Address;

    /// Sign and broadcast `call`, returning as soon as a hash exists.
    ///
    /// # Errors
    ///
    /// Returns a classified [`WalletError`] if signing or broadcasting fails.
    async fn write_contract(&self, call: &ContractCall) -> Result<TxHash, WalletError>;
}

/// Port for reading chain state.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// ERC-20 allowance of `owner` towards `spender` on `token`.
    ///
    /// # Errors
    ///
    /// Returns a [`WalletError`] if the read fails.
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, WalletError>;

    /// ERC-20 balance of `owner` on `token`.
    ///
    /// # Errors
    ///
    /// Returns a [`WalletError`] if the read fails.
    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, WalletError>;

    /// Block until `hash` is mined. There is no overall timeout.
    ///
    /// # Errors
    ///
    /// Returns a [`WalletError`] if the node cannot be queried.
    async fn wait_for_receipt(&self, hash: TxHash) -> Result<ReceiptStatus, WalletError>;
}
