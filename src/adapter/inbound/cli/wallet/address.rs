use crate::adapter::inbound::cli::operator::operator;
use crate::adapter::inbound::cli::output;
use crate::error::Result;

/// Show the wallet address derived from `WALLET_PRIVATE_KEY`.
#[allow(clippy::result_large_err)]
pub fn execute_address(config_toml: &str) -> Result<()> {
    let identity = operator().wallet_address(config_toml)?;

    output::section("Wallet Address");
    output::field("Address", identity.address);
    output::field("Chain ID", identity.chain_id);
    Ok(())
}
