//! Main pool transaction.
//!
//! Submits the prepared pool call from the connected account and waits for
//! it to be mined. The wait has no timeout: a stalled chain keeps the
//! caller in the confirming phase.

use alloy_primitives::TxHash;
use thiserror::Error;
use tracing::{info, warn};

use super::context::WalletContext;
use crate::domain::status::StatusEvent;
use crate::domain::transaction::PreparedTransaction;
use crate::port::outbound::chain::{ContractCall, ReceiptStatus, WalletError};
use crate::port::outbound::status::StatusSink;

/// Why the pool transaction failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionFailure {
    #[error("User rejected transaction")]
    UserRejected,

    #[error("Insufficient funds for transaction")]
    InsufficientFunds,

    #[error("Gas estimation failed. Please try again.")]
    Gas,

    #[error("Transaction failed with status: {status}")]
    Reverted { status: ReceiptStatus },

    #[error("{0}")]
    Other(String),
}

impl From<WalletError> for ExecutionFailure {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::UserRejected(_) => Self::UserRejected,
            WalletError::InsufficientFunds(_) => Self::InsufficientFunds,
            WalletError::Gas(_) => Self::Gas,
            WalletError::Reverted { status } => Self::Reverted { status },
            WalletError::Other(message) => Self::Other(message),
        }
    }
}

/// Sends prepared pool transactions.
#[derive(Debug, Clone)]
pub struct TransactionExecutor {
    context: WalletContext,
}

impl TransactionExecutor {
    pub fn new(context: WalletContext) -> Self {
        Self { context }
    }

    /// Submit `prepared` and wait for a successful receipt.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutionFailure`] if the wallet declines or fails to
    /// broadcast, or if the receipt does not report success.
    pub async fn execute(
        &self,
        prepared: &PreparedTransaction,
        status: &dyn StatusSink,
    ) -> Result<TxHash, ExecutionFailure> {
        let result = self.execute_inner(prepared, status).await;
        if let Err(err) = &result {
            warn!(error = %err, contract = %prepared.contract_address, "Pool transaction failed");
        }
        result
    }

    async fn execute_inner(
        &self,
        prepared: &PreparedTransaction,
        status: &dyn StatusSink,
    ) -> Result<TxHash, ExecutionFailure> {
        info!(
            contract = %prepared.contract_address,
            function = prepared.call.function_name(),
            value = %prepared.value,
            gas_limit = prepared.gas_limit,
            "Executing pool transaction"
        );

        status.emit(StatusEvent::pending(
            "Transaction Pending",
            "Please confirm the market creation transaction in your wallet...",
        ));

        let call = ContractCall::Pool {
            contract: prepared.contract_address,
            call: prepared.call.clone(),
            value: prepared.value,
            gas_limit: prepared.gas_limit,
        };
        let tx_hash = self.context.signer().write_contract(&call).await?;

        status.emit(
            StatusEvent::confirming(
                "Transaction Confirming",
                "Waiting for transaction confirmation on blockchain...",
            )
            .with_hash(tx_hash),
        );

        let receipt = self.context.reader().wait_for_receipt(tx_hash).await?;
        if receipt != ReceiptStatus::Success {
            return Err(ExecutionFailure::Reverted { status: receipt });
        }

        info!(tx_hash = %tx_hash, "Pool transaction confirmed");
        Ok(tx_hash)
    }
}
