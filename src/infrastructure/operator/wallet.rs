//! Wallet operator implementation.

use std::sync::Arc;

use alloy_primitives::utils::parse_ether;
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::creation::approval::{ApprovalResult, TokenApprovalGuard};
use crate::error::{ConfigError, Result};
use crate::infrastructure::{bootstrap, config};
use crate::port::inbound::operator::wallet::{
    ApprovalOutcome, WalletAllowanceStatus, WalletIdentity, WalletOperator,
};
use crate::port::outbound::chain::{ChainReader, WalletSigner};
use crate::port::outbound::prompt::SigningPrompt;
use crate::port::outbound::status::StatusSink;

use super::entry::Operator;

/// Whole-BITR `amount` in wei. Must be positive.
#[allow(clippy::result_large_err)]
fn approval_amount(amount: Decimal) -> Result<alloy_primitives::U256> {
    if amount <= Decimal::ZERO {
        return Err(ConfigError::InvalidValue {
            field: "amount",
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(parse_ether(&amount.normalize().to_string()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "amount",
            reason: e.to_string(),
        }
    })?)
}

#[async_trait]
impl WalletOperator for Operator {
    fn wallet_address(&self, config_toml: &str) -> Result<WalletIdentity> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        Ok(WalletIdentity {
            address: bootstrap::signer_address(&config)?,
            chain_id: config.chain.chain_id,
        })
    }

    async fn wallet_allowance(&self, config_toml: &str) -> Result<WalletAllowanceStatus> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let wallet = bootstrap::connect_wallet(&config)?;
        let contracts = config.contract_addresses()?;
        let account = wallet.account();

        let balance = wallet.token_balance(contracts.bitr_token, account).await?;
        let allowance = wallet
            .allowance(contracts.bitr_token, account, contracts.bitr_pool)
            .await?;

        Ok(WalletAllowanceStatus {
            wallet_address: account,
            token: contracts.bitr_token,
            spender: contracts.bitr_pool,
            balance,
            allowance,
        })
    }

    async fn wallet_approve(
        &self,
        config_toml: &str,
        amount: Decimal,
        prompt: Option<Arc<dyn SigningPrompt>>,
        status: &dyn StatusSink,
    ) -> Result<ApprovalOutcome> {
        let required = approval_amount(amount)?;
        let config = config::settings::Config::parse_toml(config_toml)?;
        let context = bootstrap::signing_context(&config, prompt)?;

        let guard = TokenApprovalGuard::new(context);
        Ok(match guard.ensure_allowance(required, status).await? {
            ApprovalResult::AlreadyApproved { current_allowance } => {
                ApprovalOutcome::AlreadyApproved { current_allowance }
            }
            ApprovalResult::Approved { tx_hash, amount } => ApprovalOutcome::Approved {
                tx_hash,
                amount,
                explorer_url: config.chain.tx_url(&tx_hash.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_convert_to_wei() {
        assert_eq!(
            approval_amount(dec!(1.5)).unwrap(),
            alloy_primitives::U256::from(1_500_000_000_000_000_000u128)
        );
        assert_eq!(
            approval_amount(dec!(150.00)).unwrap(),
            alloy_primitives::U256::from(150u64) * alloy_primitives::U256::from(10u64).pow(alloy_primitives::U256::from(18u64))
        );
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let err = approval_amount(Decimal::ZERO).unwrap_err();
        assert!(err.to_string().contains("invalid value for amount"));
        assert!(approval_amount(dec!(-1)).is_err());
    }

    #[tokio::test]
    async fn approve_without_key_fails_before_any_call() {
        let sink = crate::testkit::status::RecordingSink::new();
        let err = Operator
            .wallet_approve("", dec!(10), None, &sink)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("WALLET_PRIVATE_KEY"));
        assert!(sink.is_empty());
    }
}
