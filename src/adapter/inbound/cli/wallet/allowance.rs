use alloy_primitives::utils::format_ether;

use crate::adapter::inbound::cli::operator::operator;
use crate::adapter::inbound::cli::output;
use crate::error::Result;

/// Show the BITR balance and the pool allowance of the configured account.
pub async fn execute_allowance(config_toml: &str) -> Result<()> {
    output::section("BITR Allowance");

    let pb = output::spinner("Reading balances...");
    let status = match operator().wallet_allowance(config_toml).await {
        Ok(status) => {
            output::spinner_success(&pb, "Read balances");
            status
        }
        Err(e) => {
            output::spinner_fail(&pb, "Failed to read balances");
            return Err(e);
        }
    };

    output::field("Wallet", status.wallet_address);
    output::field("Token", status.token);
    output::field("Spender", status.spender);
    output::field("Balance", format!("{} BITR", format_ether(status.balance)));
    output::field("Allowance", format!("{} BITR", format_ether(status.allowance)));
    Ok(())
}
