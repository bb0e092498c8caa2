use alloy_primitives::utils::format_ether;
use rust_decimal::Decimal;

use crate::adapter::inbound::cli::operator::operator;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::prompt::signing_prompt;
use crate::adapter::inbound::cli::status::TerminalStatus;
use crate::error::Result;
use crate::port::inbound::operator::wallet::ApprovalOutcome;

/// Make sure the pool may spend at least `amount` BITR.
///
/// # Arguments
///
/// * `config_toml` - Raw TOML configuration content
/// * `amount` - Allowance in whole BITR
/// * `skip_confirm` - If true, sign without prompting
pub async fn execute_approve(config_toml: &str, amount: Decimal, skip_confirm: bool) -> Result<()> {
    output::section("BITR Approval");
    output::field("Requested", format!("{amount} BITR"));

    let status = TerminalStatus::new();
    let result = operator()
        .wallet_approve(config_toml, amount, signing_prompt(skip_confirm), &status)
        .await;
    status.finish(result.is_ok());

    match result? {
        ApprovalOutcome::AlreadyApproved { current_allowance } => {
            output::success(&format!(
                "Allowance already sufficient (current {} BITR)",
                format_ether(current_allowance)
            ));
        }
        ApprovalOutcome::Approved {
            tx_hash,
            amount,
            explorer_url,
        } => {
            output::success("Approval successful");
            output::field("Amount", format!("{} BITR", format_ether(amount)));
            output::field("Transaction", output::highlight(tx_hash));
            output::field("Explorer", output::muted(explorer_url));
        }
    }

    Ok(())
}
