//! Configuration operator implementation.

use crate::error::Result;
use crate::infrastructure::{bootstrap, config};
use crate::port::inbound::operator::configuration::{ConfigView, ConfigurationOperator};

use super::entry::Operator;

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let contracts = config.contract_addresses()?;
        let wallet_address = if config.wallet.is_configured() {
            Some(bootstrap::signer_address(&config)?)
        } else {
            None
        };

        Ok(ConfigView {
            backend_url: config.backend.base_url,
            chain_id: config.chain.chain_id,
            rpc_url: config.chain.rpc_url,
            explorer_url: config.chain.explorer_url,
            bitr_token: contracts.bitr_token,
            bitr_pool: contracts.bitr_pool,
            log_level: config.logging.level,
            log_format: config.logging.format,
            wallet_address,
        })
    }

    fn init_logging(&self, config_toml: &str, quiet: bool, verbose: u8) -> Result<()> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        config.logging.with_verbosity(quiet, verbose).init();
        Ok(())
    }
}
