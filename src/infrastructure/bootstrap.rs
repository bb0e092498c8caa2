//! Composition root: turns a [`Config`] into ready-to-use components.

use std::sync::Arc;

use alloy_primitives::Address;
use tracing::info;

use crate::adapter::outbound::backend::client::HttpMarketBackend;
use crate::adapter::outbound::evm::wallet::{parse_signer, EvmWallet};
use crate::application::creation::confirm::ConfirmingSigner;
use crate::application::creation::context::WalletContext;
use crate::application::creation::orchestrator::MarketCreator;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::backend::MarketBackend;
use crate::port::outbound::chain::{ChainReader, WalletSigner};
use crate::port::outbound::prompt::SigningPrompt;

/// Address derived from `WALLET_PRIVATE_KEY`, without touching the network.
///
/// # Errors
///
/// Returns an error if the key is missing or malformed.
#[allow(clippy::result_large_err)]
pub fn signer_address(config: &Config) -> Result<Address> {
    let key = config.wallet.private_key.as_deref().unwrap_or_default();
    Ok(parse_signer(key, config.chain.chain_id)?.address())
}

/// Connect the configured signer to the configured node.
///
/// # Errors
///
/// Returns an error if the key is missing or malformed or the RPC URL is
/// invalid.
#[allow(clippy::result_large_err)]
pub fn connect_wallet(config: &Config) -> Result<Arc<EvmWallet>> {
    let key = config.wallet.private_key.as_deref().unwrap_or_default();
    let signer = parse_signer(key, config.chain.chain_id)?;
    Ok(Arc::new(EvmWallet::connect(&config.chain, signer)?))
}

/// Assemble a wallet context from explicit signer and reader halves.
///
/// # Errors
///
/// Returns an error if a configured contract address does not parse.
#[allow(clippy::result_large_err)]
pub fn wallet_context(
    config: &Config,
    signer: Arc<dyn WalletSigner>,
    reader: Arc<dyn ChainReader>,
) -> Result<WalletContext> {
    let contracts = config.contract_addresses()?;
    Ok(WalletContext::new(signer, reader, contracts))
}

/// Put `prompt` in front of `signer` when one is given.
#[must_use]
pub fn confirming(
    signer: Arc<dyn WalletSigner>,
    prompt: Option<Arc<dyn SigningPrompt>>,
) -> Arc<dyn WalletSigner> {
    match prompt {
        Some(prompt) => Arc::new(ConfirmingSigner::new(signer, prompt)),
        None => signer,
    }
}

/// Connect the configured wallet for signing commands.
///
/// # Errors
///
/// Returns an error if the key, the RPC URL or a contract address is invalid.
#[allow(clippy::result_large_err)]
pub fn signing_context(
    config: &Config,
    prompt: Option<Arc<dyn SigningPrompt>>,
) -> Result<WalletContext> {
    let wallet = connect_wallet(config)?;
    wallet_context(config, confirming(wallet.clone(), prompt), wallet)
}

/// HTTP backend for the configured base URL.
#[must_use]
pub fn market_backend(config: &Config) -> Arc<dyn MarketBackend> {
    Arc::new(HttpMarketBackend::from_config(&config.backend))
}

/// Wire a [`MarketCreator`] around `wallet`.
#[must_use]
pub fn market_creator(config: &Config, wallet: WalletContext) -> MarketCreator {
    info!(
        backend = %config.backend.base_url,
        account = %wallet.account(),
        pool = %wallet.contracts().bitr_pool,
        "Market creator ready"
    );
    MarketCreator::new(market_backend(config), wallet)
}
