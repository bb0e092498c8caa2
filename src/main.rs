use std::process::ExitCode;

use bitredict::adapter::inbound::cli::command::Cli;
use bitredict::adapter::inbound::cli::{operator, output, run};
use bitredict::infrastructure::operator::entry::Operator;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if operator::install(Box::new(Operator)).is_err() {
        output::error("CLI operator already installed");
        return ExitCode::FAILURE;
    }

    match run::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
