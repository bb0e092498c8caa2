//! BITR allowance guard.
//!
//! Before a BITR-funded pool call, the pool must be allowed to pull the stake
//! plus the creation fee. The allowance is read from the chain every time;
//! an approval transaction is only sent when it falls short.
//!
//! Two concurrent creations from the same account can both observe a short
//! allowance and both approve. Callers that care must serialize them.

use alloy_primitives::{TxHash, U256};
use thiserror::Error;
use tracing::{info, warn};

use super::context::WalletContext;
use crate::domain::status::StatusEvent;
use crate::port::outbound::chain::{ContractCall, ReceiptStatus, WalletError};
use crate::port::outbound::status::StatusSink;

/// Why the BITR approval step failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApprovalError {
    #[error("User rejected BITR approval")]
    UserRejected,

    #[error("Insufficient BITR balance for approval")]
    InsufficientFunds,

    #[error("BITR approval transaction failed")]
    Reverted,

    #[error("{0}")]
    Other(String),
}

impl From<WalletError> for ApprovalError {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::UserRejected(_) => Self::UserRejected,
            WalletError::InsufficientFunds(_) => Self::InsufficientFunds,
            WalletError::Reverted { .. } => Self::Reverted,
            WalletError::Gas(message) | WalletError::Other(message) => Self::Other(message),
        }
    }
}

/// Result of a successful allowance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalResult {
    /// Existing allowance already covers the requirement; nothing was sent.
    AlreadyApproved { current_allowance: U256 },
    /// An approval transaction was mined.
    Approved { tx_hash: TxHash, amount: U256 },
}

impl ApprovalResult {
    /// Hash of the approval transaction, if one was needed.
    #[must_use]
    pub const fn tx_hash(&self) -> Option<&TxHash> {
        match self {
            Self::AlreadyApproved { .. } => None,
            Self::Approved { tx_hash, .. } => Some(tx_hash),
        }
    }
}

/// Ensures the pool may spend enough BITR on behalf of the account.
#[derive(Debug, Clone)]
pub struct TokenApprovalGuard {
    context: WalletContext,
}

impl TokenApprovalGuard {
    pub fn new(context: WalletContext) -> Self {
        Self { context }
    }

    /// Make sure the pool's BITR allowance is at least `required` wei.
    ///
    /// # Errors
    ///
    /// Returns an [`ApprovalError`] if the allowance cannot be read, the
    /// approval is declined or fails to submit, or the approval reverts.
    pub async fn ensure_allowance(
        &self,
        required: U256,
        status: &dyn StatusSink,
    ) -> Result<ApprovalResult, ApprovalError> {
        let result = self.ensure_allowance_inner(required, status).await;
        if let Err(err) = &result {
            warn!(error = %err, required = %required, "BITR approval failed");
        }
        result
    }

    async fn ensure_allowance_inner(
        &self,
        required: U256,
        status: &dyn StatusSink,
    ) -> Result<ApprovalResult, ApprovalError> {
        let contracts = self.context.contracts();
        let owner = self.context.account();

        let current = self
            .context
            .reader()
            .allowance(contracts.bitr_token, owner, contracts.bitr_pool)
            .await?;

        if current >= required {
            info!(current = %current, required = %required, "BITR allowance already sufficient");
            return Ok(ApprovalResult::AlreadyApproved {
                current_allowance: current,
            });
        }

        info!(current = %current, required = %required, "Requesting BITR approval");
        status.emit(StatusEvent::pending(
            "Approval Transaction",
            "Please confirm the BITR approval transaction in your wallet...",
        ));

        let call = ContractCall::Approve {
            token: contracts.bitr_token,
            spender: contracts.bitr_pool,
            amount: required,
        };
        let tx_hash = self.context.signer().write_contract(&call).await?;

        status.emit(
            StatusEvent::confirming(
                "Approval Confirming",
                "Waiting for BITR approval confirmation...",
            )
            .with_hash(tx_hash),
        );

        let receipt = self.context.reader().wait_for_receipt(tx_hash).await?;
        if receipt != ReceiptStatus::Success {
            return Err(ApprovalError::Reverted);
        }

        info!(tx_hash = %tx_hash, "BITR approval confirmed");
        Ok(ApprovalResult::Approved {
            tx_hash,
            amount: required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::status::StatusKind;
    use crate::testkit::chain::ScriptedChain;
    use crate::testkit::status::RecordingSink;

    #[test]
    fn wallet_errors_map_to_approval_messages() {
        let cases = [
            (
                WalletError::UserRejected("MetaMask Tx Signature: user rejected".into()),
                "User rejected BITR approval",
            ),
            (
                WalletError::InsufficientFunds("insufficient funds for gas".into()),
                "Insufficient BITR balance for approval",
            ),
            (
                WalletError::Reverted {
                    status: ReceiptStatus::Reverted,
                },
                "BITR approval transaction failed",
            ),
            (
                WalletError::Gas("intrinsic gas too low".into()),
                "intrinsic gas too low",
            ),
            (WalletError::Other("nonce too low".into()), "nonce too low"),
        ];

        for (wallet_err, expected) in cases {
            assert_eq!(ApprovalError::from(wallet_err).to_string(), expected);
        }
    }

    #[tokio::test]
    async fn sufficient_allowance_sends_nothing() {
        let chain = ScriptedChain::new().with_allowance(U256::from(1_000u64));
        let guard = TokenApprovalGuard::new(chain.context());
        let sink = RecordingSink::new();

        let result = guard
            .ensure_allowance(U256::from(1_000u64), &sink)
            .await
            .unwrap();

        assert_eq!(
            result,
            ApprovalResult::AlreadyApproved {
                current_allowance: U256::from(1_000u64)
            }
        );
        assert!(chain.submitted().is_empty());
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn short_allowance_approves_exact_requirement() {
        let chain = ScriptedChain::new().with_allowance(U256::from(10u64));
        let guard = TokenApprovalGuard::new(chain.context());
        let sink = RecordingSink::new();

        let result = guard
            .ensure_allowance(U256::from(500u64), &sink)
            .await
            .unwrap();

        let submitted = chain.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted[0],
            ContractCall::Approve {
                token: chain.contracts().bitr_token,
                spender: chain.contracts().bitr_pool,
                amount: U256::from(500u64),
            }
        );
        assert_eq!(result.tx_hash(), Some(&chain.hash_for(0)));
        assert_eq!(sink.kinds(), [StatusKind::Pending, StatusKind::Confirming]);
        assert_eq!(sink.events()[1].hash, Some(chain.hash_for(0)));
    }

    #[tokio::test]
    async fn reverted_approval_is_reported() {
        let chain = ScriptedChain::new()
            .with_allowance(U256::ZERO)
            .with_receipt(ReceiptStatus::Reverted);
        let guard = TokenApprovalGuard::new(chain.context());
        let sink = RecordingSink::new();

        let err = guard
            .ensure_allowance(U256::from(1u64), &sink)
            .await
            .unwrap_err();

        assert_eq!(err, ApprovalError::Reverted);
        assert_eq!(err.to_string(), "BITR approval transaction failed");
    }

    #[tokio::test]
    async fn rejected_signature_stops_before_waiting() {
        let chain = ScriptedChain::new()
            .with_allowance(U256::ZERO)
            .with_write_error(WalletError::UserRejected("declined".into()));
        let guard = TokenApprovalGuard::new(chain.context());
        let sink = RecordingSink::new();

        let err = guard
            .ensure_allowance(U256::from(1u64), &sink)
            .await
            .unwrap_err();

        assert_eq!(err, ApprovalError::UserRejected);
        assert_eq!(sink.titles(), ["Approval Transaction"]);
        assert_eq!(chain.receipt_waits(), 0);
    }

    #[tokio::test]
    async fn allowance_read_failure_is_passed_through() {
        let chain = ScriptedChain::new().with_read_error(WalletError::Other("rpc down".into()));
        let guard = TokenApprovalGuard::new(chain.context());
        let sink = RecordingSink::new();

        let err = guard
            .ensure_allowance(U256::from(1u64), &sink)
            .await
            .unwrap_err();

        assert_eq!(err, ApprovalError::Other("rpc down".into()));
        assert!(chain.submitted().is_empty());
    }
}
