use crate::adapter::inbound::cli::operator::{operator, ConfigSource};
use crate::adapter::inbound::cli::output;
use crate::error::Result;

/// Print the effective configuration after defaults and overrides.
#[allow(clippy::result_large_err)]
pub fn execute_config(config_toml: &str, source: &ConfigSource) -> Result<()> {
    let view = operator().show_config(config_toml)?;

    output::section("Configuration Check");
    output::field("Config", source);
    output::success("Configuration is valid");

    output::section("Summary");
    output::field("Backend", &view.backend_url);
    output::field("Chain ID", view.chain_id);
    output::field("RPC", &view.rpc_url);
    output::field("Explorer", &view.explorer_url);
    output::field("BITR token", view.bitr_token);
    output::field("Pool", view.bitr_pool);
    output::field("Logging", format!("{} ({})", view.log_level, view.log_format));

    match view.wallet_address {
        Some(address) => {
            output::success("Wallet credentials detected");
            output::field("Wallet", address);
        }
        None => {
            output::warning("Wallet credentials not configured (set WALLET_PRIVATE_KEY to sign)");
        }
    }

    output::success("Configuration check complete");
    Ok(())
}
