//! Command dispatch.

use std::process::ExitCode;

use tracing::info;

use super::command::{CheckCommand, Cli, Commands, WalletCommand};
use super::operator::{config_source, operator, read_config_toml};
use super::output::{self, OutputConfig};
use super::{check, create, wallet};
use crate::error::Result;

/// Run a parsed command line.
///
/// Loads configuration, initializes logging and dispatches. A creation that
/// ends in a failed outcome exits with status 1.
///
/// # Errors
///
/// Returns an error if configuration is invalid or a wallet command fails.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let source = config_source(cli.config.as_deref());
    let config_toml = read_config_toml(&source)?;
    operator().init_logging(&config_toml, cli.quiet, cli.verbose)?;
    info!(version = env!("CARGO_PKG_VERSION"), config = %source, "bitredict starting");

    match &cli.command {
        Commands::Create(command) => {
            let created = create::execute(&config_toml, command).await?;
            return Ok(if created {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
        Commands::Wallet(WalletCommand::Address) => {
            wallet::address::execute_address(&config_toml)?;
        }
        Commands::Wallet(WalletCommand::Allowance) => {
            wallet::allowance::execute_allowance(&config_toml).await?;
        }
        Commands::Wallet(WalletCommand::Approve(args)) => {
            wallet::approve::execute_approve(&config_toml, args.amount, args.yes).await?;
        }
        Commands::Check(CheckCommand::Config) => {
            check::config::execute_config(&config_toml, &source)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
