//! Local-key wallet on an EVM JSON-RPC node.
//!
//! Signs with a [`PrivateKeySigner`] bound to the configured chain id and
//! talks to the node over HTTP. Implements both [`WalletSigner`] and
//! [`ChainReader`], so one instance backs a whole
//! [`WalletContext`](crate::application::creation::context::WalletContext).

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::network::EthereumWallet;
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{debug, info};

use super::classify::{classify, classify_contract_error};
use super::contracts::{IBitredictPool, IERC20};
use super::settings::ChainConfig;
use crate::domain::transaction::PoolCall;
use crate::error::{ConfigError, Result};
use crate::port::outbound::chain::{
    ChainReader, ContractCall, ReceiptStatus, WalletError, WalletSigner,
};

/// Environment variable holding the signer key.
pub const PRIVATE_KEY_ENV: &str = "WALLET_PRIVATE_KEY";

/// Parse a hex private key and bind it to `chain_id`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingField`] for an empty key and
/// [`ConfigError::InvalidValue`] if it does not parse.
pub fn parse_signer(private_key: &str, chain_id: u64) -> Result<PrivateKeySigner> {
    let key = private_key.trim();
    if key.is_empty() {
        return Err(ConfigError::MissingField {
            field: PRIVATE_KEY_ENV,
        }
        .into());
    }

    let signer = PrivateKeySigner::from_str(key)
        .map_err(|e| ConfigError::InvalidValue {
            field: PRIVATE_KEY_ENV,
            reason: e.to_string(),
        })?
        .with_chain_id(Some(chain_id));
    Ok(signer)
}

/// Wallet backed by a local private key and an HTTP provider.
pub struct EvmWallet {
    account: Address,
    provider: DynProvider,
    receipt_poll: Duration,
}

impl EvmWallet {
    /// Connect `signer` to the node in `config`.
    ///
    /// No network call is made until the first read or write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the RPC URL does not parse.
    pub fn connect(config: &ChainConfig, signer: PrivateKeySigner) -> Result<Self> {
        let rpc_url: url::Url =
            config
                .rpc_url
                .parse()
                .map_err(|e: url::ParseError| ConfigError::InvalidValue {
                    field: "chain.rpc_url",
                    reason: e.to_string(),
                })?;

        let account = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url)
            .erased();

        info!(
            account = %account,
            chain_id = config.chain_id,
            rpc_url = %config.rpc_url,
            "Wallet connected"
        );

        Ok(Self {
            account,
            provider,
            receipt_poll: Duration::from_millis(config.receipt_poll_ms),
        })
    }

    async fn send_pool_call(
        &self,
        contract: Address,
        call: &PoolCall,
        value: U256,
        gas_limit: u64,
    ) -> std::result::Result<TxHash, WalletError> {
        let pool = IBitredictPool::new(contract, &self.provider);
        match call {
            PoolCall::CreatePool(args) => {
                let pending = pool
                    .createPool(
                        args.predicted_outcome,
                        args.odds,
                        args.creator_stake,
                        args.event_start_time,
                        args.event_end_time,
                        args.league.clone(),
                        args.category.clone(),
                        args.region.clone(),
                        args.is_private,
                        args.max_bet_per_user,
                        args.use_bitr,
                        args.oracle_type,
                        args.market_id,
                    )
                    .value(value)
                    .gas(gas_limit)
                    .send()
                    .await
                    .map_err(|e| classify_contract_error(&e))?;
                Ok(*pending.tx_hash())
            }
        }
    }
}

#[async_trait]
impl WalletSigner for EvmWallet {
    fn account(&self) -> Address {
        self.account
    }

    async fn write_contract(
        &self,
        call: &ContractCall,
    ) -> std::result::Result<TxHash, WalletError> {
        debug!(
            to = %call.target(),
            function = call.function_name(),
            "Submitting contract call"
        );

        let hash = match call {
            ContractCall::Approve {
                token,
                spender,
                amount,
            } => {
                let token = IERC20::new(*token, &self.provider);
                let pending = token
                    .approve(*spender, *amount)
                    .send()
                    .await
                    .map_err(|e| classify_contract_error(&e))?;
                *pending.tx_hash()
            }
            ContractCall::Pool {
                contract,
                call,
                value,
                gas_limit,
            } => {
                self.send_pool_call(*contract, call, *value, *gas_limit)
                    .await?
            }
        };

        info!(tx_hash = %hash, function = call.function_name(), "Transaction submitted");
        Ok(hash)
    }
}

#[async_trait]
impl ChainReader for EvmWallet {
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> std::result::Result<U256, WalletError> {
        let token = IERC20::new(token, &self.provider);
        token
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| classify_contract_error(&e))
    }

    async fn token_balance(
        &self,
        token: Address,
        owner: Address,
    ) -> std::result::Result<U256, WalletError> {
        let token = IERC20::new(token, &self.provider);
        token
            .balanceOf(owner)
            .call()
            .await
            .map_err(|e| classify_contract_error(&e))
    }

    async fn wait_for_receipt(
        &self,
        hash: TxHash,
    ) -> std::result::Result<ReceiptStatus, WalletError> {
        loop {
            let receipt = self
                .provider
                .get_transaction_receipt(hash)
                .await
                .map_err(|e| classify(e.as_error_resp().map(|resp| resp.code), &e.to_string()))?;

            if let Some(receipt) = receipt {
                let status = if receipt.status() {
                    ReceiptStatus::Success
                } else {
                    ReceiptStatus::Reverted
                };
                debug!(tx_hash = %hash, status = %status, "Receipt received");
                return Ok(status);
            }

            sleep(self.receipt_poll).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's first default account.
    const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn empty_key_is_missing() {
        let err = parse_signer("  ", 10143).unwrap_err();
        assert!(err.to_string().contains("WALLET_PRIVATE_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn malformed_key_is_invalid() {
        let err = parse_signer("not-a-key", 10143).unwrap_err();
        assert!(err.to_string().contains("invalid value for WALLET_PRIVATE_KEY"));
    }

    #[test]
    fn key_derives_expected_account() {
        let signer = parse_signer(TEST_KEY, 10143).unwrap();
        assert_eq!(signer.address(), Address::from_str(TEST_ADDRESS).unwrap());
        assert_eq!(signer.chain_id(), Some(10143));
    }

    #[test]
    fn signer_is_bound_to_the_configured_chain() {
        let signer = parse_signer(TEST_KEY, 31337).unwrap();
        assert_eq!(signer.chain_id(), Some(31337));
    }

    #[tokio::test]
    async fn connect_does_not_touch_the_network() {
        let signer = parse_signer(TEST_KEY, 10143).unwrap();
        let config = ChainConfig {
            rpc_url: "http://127.0.0.1:1".into(),
            ..ChainConfig::default()
        };
        let wallet = EvmWallet::connect(&config, signer).unwrap();
        assert_eq!(wallet.account(), Address::from_str(TEST_ADDRESS).unwrap());
    }

    #[test]
    fn bad_rpc_url_is_rejected() {
        let signer = parse_signer(TEST_KEY, 10143).unwrap();
        let config = ChainConfig {
            rpc_url: "not a url".into(),
            ..ChainConfig::default()
        };
        assert!(EvmWallet::connect(&config, signer).is_err());
    }
}
