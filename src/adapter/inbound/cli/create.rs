//! `bitredict create` handlers.

use super::command::CreateCommand;
use super::operator::operator;
use super::output;
use super::prompt::signing_prompt;
use super::status::TerminalStatus;
use crate::domain::market::{MarketCreationRequest, PaymentToken};
use crate::domain::outcome::CreationOutcome;
use crate::error::Result;
use crate::port::inbound::operator::creation::CreationReport;

/// Run one guided market creation. Returns whether the market was created.
///
/// # Errors
///
/// Returns an error only if the wallet cannot be set up; creation failures
/// are reported through the outcome.
pub async fn execute(config_toml: &str, command: &CreateCommand) -> Result<bool> {
    let (request, skip_prompt) = match command {
        CreateCommand::Football(args) => (
            MarketCreationRequest::from(args.to_request()),
            args.terms.yes,
        ),
        CreateCommand::Crypto(args) => (
            MarketCreationRequest::from(args.to_request()),
            args.terms.yes,
        ),
    };

    output::section(&format!("Create {} market", request.kind()));
    output::field(
        "Payment",
        match request.payment() {
            PaymentToken::Native => "native",
            PaymentToken::Bitr => "BITR",
        },
    );
    output::field("Stake", request.terms().creator_stake);
    output::field("Odds", request.terms().odds);

    let status = TerminalStatus::new();
    let result = operator()
        .create_market(config_toml, &request, signing_prompt(skip_prompt), &status)
        .await;
    status.finish(result.is_ok());
    let report = result?;

    render(&report);
    Ok(report.outcome.is_success())
}

fn render(report: &CreationReport) {
    if output::is_json() {
        output::json_output(&report.outcome.to_json());
        return;
    }

    output::section("Summary");
    output::field("Account", report.account);
    match &report.outcome {
        CreationOutcome::Created {
            transaction_hash,
            market_id,
        } => {
            output::field("Transaction", output::highlight(transaction_hash));
            output::field("Market ID", market_id);
            if let Some(url) = &report.explorer_url {
                output::field("Explorer", output::muted(url));
            }
        }
        CreationOutcome::Failed { stage, error } => {
            output::field("Stage", stage);
            output::field("Error", error);
            output::hint("nothing was created; fix the cause above and retry");
        }
    }
}
