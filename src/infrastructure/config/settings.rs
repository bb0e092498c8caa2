//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Values
//! come from an optional TOML file, then environment overrides. The signer
//! key is only ever read from `WALLET_PRIVATE_KEY`.
//!
//! # Example
//!
//! ```no_run
//! use bitredict::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("bitredict.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::LoggingConfig;
use super::wallet::WalletConfig;
use crate::adapter::outbound::backend::settings::BackendConfig;
use crate::adapter::outbound::evm::settings::{ChainConfig, ContractsConfig};
use crate::adapter::outbound::evm::wallet::PRIVATE_KEY_ENV;
use crate::application::creation::context::ContractAddresses;
use crate::error::{ConfigError, Result};

/// Overrides the backend base URL.
pub const API_URL_ENV: &str = "BITREDICT_API_URL";
/// Overrides the chain RPC URL.
pub const RPC_URL_ENV: &str = "BITREDICT_RPC_URL";
/// Overrides the BITR token address.
pub const BITR_TOKEN_ENV: &str = "BITREDICT_BITR_TOKEN_ADDRESS";
/// Overrides the pool address.
pub const POOL_ADDRESS_ENV: &str = "BITREDICT_POOL_ADDRESS";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Guided-market backend.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Chain connection.
    #[serde(default)]
    pub chain: ChainConfig,

    /// Deployed contracts.
    #[serde(default)]
    pub contracts: ContractsConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Signer key material, filled from the environment.
    #[serde(skip)]
    pub wallet: WalletConfig,
}

impl Config {
    /// Parse configuration from TOML content and the process environment.
    ///
    /// Empty content yields the built-in defaults. Environment overrides are
    /// applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content, reading overrides via `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Empty values are ignored, except for the private key which is taken
    /// as given so a blank key is reported as missing.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = set(API_URL_ENV) {
            self.backend.base_url = url;
        }
        if let Some(url) = set(RPC_URL_ENV) {
            self.chain.rpc_url = url;
        }
        if let Some(address) = set(BITR_TOKEN_ENV) {
            self.contracts.bitr_token = address;
        }
        if let Some(address) = set(POOL_ADDRESS_ENV) {
            self.contracts.bitr_pool = address;
        }
        self.wallet.private_key = lookup(PRIVATE_KEY_ENV);
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "backend.base_url",
            }
            .into());
        }
        url::Url::parse(&self.backend.base_url).map_err(|e| ConfigError::InvalidValue {
            field: "backend.base_url",
            reason: e.to_string(),
        })?;
        if self.backend.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.chain.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "chain.rpc_url",
            }
            .into());
        }
        url::Url::parse(&self.chain.rpc_url).map_err(|e| ConfigError::InvalidValue {
            field: "chain.rpc_url",
            reason: e.to_string(),
        })?;
        if self.chain.chain_id == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain.chain_id",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.chain.receipt_poll_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "chain.receipt_poll_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        self.contracts.addresses()?;

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected pretty or json, got {other}"),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Parsed contract addresses.
    ///
    /// # Errors
    ///
    /// Returns an error if an address does not parse.
    #[allow(clippy::result_large_err)]
    pub fn contract_addresses(&self) -> Result<ContractAddresses> {
        Ok(self.contracts.addresses()?)
    }

    /// Initialize the tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn parse(content: &str) -> Result<Config> {
        Config::parse_toml_with_env(content, |_| None)
    }

    #[test]
    fn empty_file_yields_monad_testnet_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.backend.base_url, "https://bitr-backend.fly.dev");
        assert_eq!(config.chain.chain_id, 10143);
        assert_eq!(config.logging.level, "info");
        assert!(config.wallet.private_key.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let config = parse(
            r#"
            [backend]
            base_url = "http://localhost:3000"
            timeout_ms = 1500

            [chain]
            chain_id = 31337
            rpc_url = "http://localhost:8545"
            receipt_poll_ms = 250

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.backend.base_url, "http://localhost:3000");
        assert_eq!(config.backend.timeout_ms, 1500);
        assert_eq!(config.backend.connect_timeout_ms, 5_000);
        assert_eq!(config.chain.chain_id, 31337);
        assert_eq!(config.chain.receipt_poll_ms, 250);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        config.apply_env(env(&[
            (API_URL_ENV, "http://api.local"),
            (RPC_URL_ENV, "http://rpc.local"),
            (POOL_ADDRESS_ENV, "0x0000000000000000000000000000000000000001"),
            (PRIVATE_KEY_ENV, "0xkey"),
        ]));

        assert_eq!(config.backend.base_url, "http://api.local");
        assert_eq!(config.chain.rpc_url, "http://rpc.local");
        assert_eq!(
            config.contracts.bitr_pool,
            "0x0000000000000000000000000000000000000001"
        );
        assert_eq!(config.wallet.private_key.as_deref(), Some("0xkey"));
    }

    #[test]
    fn parse_applies_env_before_validation() {
        let err = Config::parse_toml_with_env("", env(&[(RPC_URL_ENV, "not a url")])).unwrap_err();
        assert!(err.to_string().contains("chain.rpc_url"));

        let config =
            Config::parse_toml_with_env("", env(&[(PRIVATE_KEY_ENV, "0xabc")])).unwrap();
        assert!(config.wallet.is_configured());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.apply_env(env(&[(API_URL_ENV, "  ")]));
        assert_eq!(config.backend.base_url, "https://bitr-backend.fly.dev");
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let err = parse("[chain]\nreceipt_poll_ms = 0\n").unwrap_err();
        assert!(err.to_string().contains("chain.receipt_poll_ms"));
    }

    #[test]
    fn empty_backend_url_is_rejected() {
        let err = parse("[backend]\nbase_url = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("missing required field: backend.base_url"));
    }

    #[test]
    fn bad_contract_address_is_rejected() {
        let err = parse("[contracts]\nbitr_token = \"nope\"\n").unwrap_err();
        assert!(err.to_string().contains("contracts.bitr_token"));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let err = parse("[logging]\nformat = \"xml\"\n").unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse("[backend\n").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
