//! Signing confirmation.
//!
//! [`ConfirmingSigner`] wraps the real wallet and asks a [`SigningPrompt`]
//! before every transaction, the way a browser wallet pops up a signing
//! dialog. Declining surfaces as [`WalletError::UserRejected`], exactly like
//! a rejected wallet request.

use std::sync::Arc;

use alloy_primitives::utils::format_ether;
use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use tracing::debug;

use crate::port::outbound::chain::{ContractCall, WalletError, WalletSigner};
use crate::port::outbound::prompt::SigningPrompt;

/// Signer decorator that requires confirmation before each write.
pub struct ConfirmingSigner {
    inner: Arc<dyn WalletSigner>,
    prompt: Arc<dyn SigningPrompt>,
}

impl ConfirmingSigner {
    pub fn new(inner: Arc<dyn WalletSigner>, prompt: Arc<dyn SigningPrompt>) -> Self {
        Self { inner, prompt }
    }
}

/// One-line description of what the account holder is about to sign.
#[must_use]
pub fn describe(call: &ContractCall) -> String {
    match call {
        ContractCall::Approve {
            spender, amount, ..
        } => format!("Approve {} BITR for {spender}?", format_ether(*amount)),
        ContractCall::Pool {
            contract,
            call,
            value,
            gas_limit,
        } => format!(
            "Send {} to {contract} with {} native value (gas limit {gas_limit})?",
            call.function_name(),
            format_ether(*value)
        ),
    }
}

#[async_trait]
impl WalletSigner for ConfirmingSigner {
    fn account(&self) -> Address {
        self.inner.account()
    }

    async fn write_contract(&self, call: &ContractCall) -> Result<TxHash, WalletError> {
        let prompt = Arc::clone(&self.prompt);
        let question = describe(call);
        let approved = tokio::task::spawn_blocking(move || prompt.confirm(&question))
            .await
            .map_err(|e| WalletError::Other(e.to_string()))?
            .map_err(|e| WalletError::Other(format!("signing prompt failed: {e}")))?;

        if !approved {
            debug!(function = call.function_name(), "Signing declined");
            return Err(WalletError::UserRejected(
                "user rejected the signing request".into(),
            ));
        }

        self.inner.write_contract(call).await
    }
}
