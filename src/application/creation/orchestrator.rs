//! Guided market creation flow.
//!
//! Sequences preparation, the optional BITR approval, the pool transaction
//! and backend confirmation. Each step gates the next; the first failure
//! ends the attempt. Once the pool transaction is mined the attempt counts
//! as a success even if the backend never indexes it, because the stake has
//! already moved on-chain.

use std::sync::Arc;

use alloy_primitives::U256;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use super::approval::TokenApprovalGuard;
use super::context::WalletContext;
use super::executor::TransactionExecutor;
use crate::domain::market::{
    CryptoMarketRequest, FootballMarketRequest, MarketCreationRequest, MarketKind, PaymentToken,
};
use crate::domain::outcome::{CreationOutcome, FailureStage};
use crate::domain::status::StatusEvent;
use crate::domain::transaction::PreparedTransaction;
use crate::port::outbound::backend::MarketBackend;
use crate::port::outbound::status::StatusSink;

/// Creates guided markets end to end.
///
/// Holds no per-call state, so one instance can serve any number of
/// independent creations.
#[derive(Clone)]
pub struct MarketCreator {
    backend: Arc<dyn MarketBackend>,
    approvals: TokenApprovalGuard,
    executor: TransactionExecutor,
}

impl MarketCreator {
    pub fn new(backend: Arc<dyn MarketBackend>, wallet: WalletContext) -> Self {
        Self {
            backend,
            approvals: TokenApprovalGuard::new(wallet.clone()),
            executor: TransactionExecutor::new(wallet),
        }
    }

    /// Approval guard sharing this creator's wallet.
    #[must_use]
    pub const fn approvals(&self) -> &TokenApprovalGuard {
        &self.approvals
    }

    /// Create a market on a football fixture.
    pub async fn create_football(
        &self,
        request: &FootballMarketRequest,
        status: &dyn StatusSink,
    ) -> CreationOutcome {
        self.create(&MarketCreationRequest::Football(request.clone()), status)
            .await
    }

    /// Create a market on a crypto price target.
    pub async fn create_crypto(
        &self,
        request: &CryptoMarketRequest,
        status: &dyn StatusSink,
    ) -> CreationOutcome {
        self.create(&MarketCreationRequest::Crypto(request.clone()), status)
            .await
    }

    /// Run the full flow for `request`, reporting progress to `status`.
    ///
    /// Never fails: every error is turned into [`CreationOutcome::Failed`]
    /// after a terminal status event has been emitted.
    pub async fn create(
        &self,
        request: &MarketCreationRequest,
        status: &dyn StatusSink,
    ) -> CreationOutcome {
        let span = info_span!(
            "create_market",
            invocation = %Uuid::new_v4(),
            kind = %request.kind(),
        );
        self.run(request, status).instrument(span).await
    }

    async fn run(&self, request: &MarketCreationRequest, status: &dyn StatusSink) -> CreationOutcome {
        let kind = request.kind();
        info!(payment = ?request.payment(), "Starting guided market creation");

        status.emit(StatusEvent::info(
            "Preparing Transaction",
            format!("Preparing {}market creation transaction...", qualifier(kind)),
        ));

        let (prepared, bitr_required) = match self.prepare(request).await {
            Ok(prepared) => prepared,
            Err(reason) => {
                let error = format!("Failed to prepare transaction: {reason}");
                warn!(error = %error, "Preparation failed");
                status.emit(StatusEvent::error("Preparation Failed", error.clone()));
                return CreationOutcome::Failed {
                    stage: FailureStage::Preparation,
                    error,
                };
            }
        };

        info!(
            contract = %prepared.contract_address,
            function = prepared.call.function_name(),
            market_id = %prepared.market_id(),
            "Transaction data prepared"
        );

        if let Some(required) = bitr_required {
            status.emit(StatusEvent::pending(
                "BITR Approval",
                "Requesting BITR token approval...",
            ));

            if let Err(err) = self.approvals.ensure_allowance(required, status).await {
                let error = format!("BITR approval failed: {err}");
                status.emit(StatusEvent::error("Approval Failed", error.clone()));
                return CreationOutcome::Failed {
                    stage: FailureStage::Approval,
                    error,
                };
            }

            status.emit(StatusEvent::info(
                "Approval Complete",
                "BITR token approval successful",
            ));
        }

        status.emit(StatusEvent::confirming(
            "Creating Market",
            format!("Executing {}market creation transaction...", qualifier(kind)),
        ));

        let tx_hash = match self.executor.execute(&prepared, status).await {
            Ok(hash) => hash,
            Err(err) => {
                let error = format!("Transaction execution failed: {err}");
                status.emit(StatusEvent::error("Transaction Failed", error.clone()));
                return CreationOutcome::Failed {
                    stage: FailureStage::Execution,
                    error,
                };
            }
        };

        status.emit(
            StatusEvent::confirming("Transaction Confirmed", "Transaction confirmed on blockchain")
                .with_hash(tx_hash),
        );

        status.emit(StatusEvent::info(
            "Finalizing Market",
            "Confirming market creation with backend...",
        ));

        match self
            .backend
            .confirm(kind, tx_hash, &prepared.market_details)
            .await
        {
            Ok(()) => {
                info!(tx_hash = %tx_hash, "Backend confirmation completed");
                status.emit(
                    StatusEvent::success(
                        "Market Created!",
                        format!(
                            "Your {} prediction market has been created successfully!",
                            kind.label()
                        ),
                    )
                    .with_hash(tx_hash),
                );
            }
            Err(err) => {
                warn!(
                    error = %err,
                    tx_hash = %tx_hash,
                    "Backend confirmation failed, but transaction was successful"
                );
                status.emit(StatusEvent::error(
                    "Backend Warning",
                    "Transaction successful but backend confirmation failed",
                ));
            }
        }

        CreationOutcome::Created {
            transaction_hash: tx_hash,
            market_id: prepared.market_id().clone(),
        }
    }

    /// Validate, prepare, and work out how much BITR the pool will pull.
    async fn prepare(
        &self,
        request: &MarketCreationRequest,
    ) -> Result<(PreparedTransaction, Option<U256>), String> {
        request.validate().map_err(|e| e.to_string())?;

        let prepared = self
            .backend
            .prepare(request)
            .await
            .map_err(|e| e.to_string())?;

        let required = bitr_requirement(&prepared, request.payment())?;
        Ok((prepared, required))
    }
}

/// The BITR total to approve, if the payment path needs one.
///
/// BITR payments require the backend to state the total explicitly
/// (stake plus creation fee); positional arguments are never used for this.
fn bitr_requirement(
    prepared: &PreparedTransaction,
    payment: PaymentToken,
) -> Result<Option<U256>, String> {
    if prepared.call.uses_bitr() != payment.uses_bitr() {
        return Err(format!(
            "prepared call expects {} payment but request uses {}",
            if prepared.call.uses_bitr() { "BITR" } else { "native" },
            if payment.uses_bitr() { "BITR" } else { "native" },
        ));
    }

    match payment {
        PaymentToken::Native => Ok(None),
        PaymentToken::Bitr => prepared
            .total_required_wei
            .map(Some)
            .ok_or_else(|| "missing totalRequiredWei for BITR payment".to_string()),
    }
}

const fn qualifier(kind: MarketKind) -> &'static str {
    match kind {
        MarketKind::Football => "",
        MarketKind::Crypto => "cryptocurrency ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::prepared_transaction;

    #[test]
    fn native_payment_needs_no_approval() {
        let prepared = prepared_transaction(false);
        assert_eq!(bitr_requirement(&prepared, PaymentToken::Native), Ok(None));
    }

    #[test]
    fn bitr_payment_uses_explicit_total() {
        let mut prepared = prepared_transaction(true);
        prepared.total_required_wei = Some(U256::from(150u64));
        assert_eq!(
            bitr_requirement(&prepared, PaymentToken::Bitr),
            Ok(Some(U256::from(150u64)))
        );
    }

    #[test]
    fn bitr_payment_without_total_is_rejected() {
        let mut prepared = prepared_transaction(true);
        prepared.total_required_wei = None;
        assert_eq!(
            bitr_requirement(&prepared, PaymentToken::Bitr),
            Err("missing totalRequiredWei for BITR payment".to_string())
        );
    }

    #[test]
    fn payment_mismatch_is_rejected() {
        let prepared = prepared_transaction(true);
        let err = bitr_requirement(&prepared, PaymentToken::Native).unwrap_err();
        assert!(err.contains("expects BITR payment"));
    }

    #[test]
    fn crypto_messages_are_qualified() {
        assert_eq!(qualifier(MarketKind::Football), "");
        assert_eq!(qualifier(MarketKind::Crypto), "cryptocurrency ");
    }
}
