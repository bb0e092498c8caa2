//! Chain and contract configuration.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::Deserialize;

use crate::application::creation::context::ContractAddresses;
use crate::error::ConfigError;

/// Monad testnet chain id.
pub const MONAD_TESTNET_CHAIN_ID: u64 = 10143;

/// Public Monad testnet RPC endpoint.
pub const MONAD_TESTNET_RPC: &str = "https://testnet-rpc.monad.xyz/";

/// BITR token on Monad testnet.
pub const BITR_TOKEN_ADDRESS: &str = "0xbB966Dd2696005c9e893304819237Ea4006A9380";

/// Bitredict pool on Monad testnet.
pub const BITREDICT_POOL_ADDRESS: &str = "0x080dB155ded47b08D9807ad38Be550784D4Df1e6";

/// Chain connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainConfig {
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,
    /// JSON-RPC endpoint.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Block explorer base URL, used to print transaction links.
    #[serde(default = "default_explorer_url")]
    pub explorer_url: String,
    /// Interval between receipt polls in milliseconds.
    #[serde(default = "default_receipt_poll_ms")]
    pub receipt_poll_ms: u64,
}

const fn default_chain_id() -> u64 {
    MONAD_TESTNET_CHAIN_ID
}

fn default_rpc_url() -> String {
    MONAD_TESTNET_RPC.into()
}

fn default_explorer_url() -> String {
    "https://testnet.monadexplorer.com".into()
}

const fn default_receipt_poll_ms() -> u64 {
    1000
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            rpc_url: default_rpc_url(),
            explorer_url: default_explorer_url(),
            receipt_poll_ms: default_receipt_poll_ms(),
        }
    }
}

impl ChainConfig {
    /// Explorer link for a transaction hash.
    #[must_use]
    pub fn tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{hash}", self.explorer_url.trim_end_matches('/'))
    }
}

/// Deployed contract addresses, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContractsConfig {
    /// BITR ERC-20 token.
    #[serde(default = "default_bitr_token")]
    pub bitr_token: String,
    /// Bitredict pool, the spender of BITR approvals.
    #[serde(default = "default_bitr_pool")]
    pub bitr_pool: String,
}

fn default_bitr_token() -> String {
    BITR_TOKEN_ADDRESS.into()
}

fn default_bitr_pool() -> String {
    BITREDICT_POOL_ADDRESS.into()
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            bitr_token: default_bitr_token(),
            bitr_pool: default_bitr_pool(),
        }
    }
}

impl ContractsConfig {
    /// Parse the configured addresses.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the address that does not
    /// parse.
    pub fn addresses(&self) -> Result<ContractAddresses, ConfigError> {
        Ok(ContractAddresses {
            bitr_token: parse_address("contracts.bitr_token", &self.bitr_token)?,
            bitr_pool: parse_address("contracts.bitr_pool", &self.bitr_pool)?,
        })
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value.trim()).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_monad_testnet() {
        let chain = ChainConfig::default();
        assert_eq!(chain.chain_id, 10143);
        assert_eq!(chain.rpc_url, "https://testnet-rpc.monad.xyz/");
        assert_eq!(chain.receipt_poll_ms, 1000);
    }

    #[test]
    fn default_addresses_parse() {
        let addresses = ContractsConfig::default().addresses().unwrap();
        assert_eq!(
            addresses.bitr_token,
            Address::from_str(BITR_TOKEN_ADDRESS).unwrap()
        );
        assert_eq!(
            addresses.bitr_pool,
            Address::from_str(BITREDICT_POOL_ADDRESS).unwrap()
        );
    }

    #[test]
    fn bad_address_names_field() {
        let contracts = ContractsConfig {
            bitr_pool: "0x1234".into(),
            ..ContractsConfig::default()
        };
        let err = contracts.addresses().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "contracts.bitr_pool",
                ..
            }
        ));
    }

    #[test]
    fn tx_url_joins_explorer() {
        let chain = ChainConfig {
            explorer_url: "https://explorer.example/".into(),
            ..ChainConfig::default()
        };
        assert_eq!(chain.tx_url("0xabc"), "https://explorer.example/tx/0xabc");
    }
}
