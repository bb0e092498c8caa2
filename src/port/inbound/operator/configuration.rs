//! Configuration projections for operator-facing adapters.

use alloy_primitives::Address;

use crate::error::Result;

/// Effective configuration after defaults and environment overrides.
#[derive(Debug, Clone)]
pub struct ConfigView {
    pub backend_url: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer_url: String,
    pub bitr_token: Address,
    pub bitr_pool: Address,
    pub log_level: String,
    pub log_format: String,
    /// Account derived from `WALLET_PRIVATE_KEY`, when one is set.
    pub wallet_address: Option<Address>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `check config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the wallet key is invalid.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Install the tracing subscriber described by the logging section.
    ///
    /// `quiet` and `verbose` come from the command line and override the
    /// configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn init_logging(&self, config_toml: &str, quiet: bool, verbose: u8) -> Result<()>;
}
