//! Command-line interface definitions.
//!
//! Defines the CLI structure for the bitredict application using `clap`:
//! guided market creation, wallet helpers and configuration checks.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use crate::domain::market::{
    CryptoMarketRequest, Cryptocurrency, FootballMarketRequest, MarketTerms, PaymentToken,
    PriceDirection,
};

/// Guided prediction-market creation for the Bitredict pool
#[derive(Parser, Debug)]
#[command(name = "bitredict")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file [default: ./bitredict.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a guided prediction market
    #[command(subcommand)]
    Create(CreateCommand),

    /// Inspect the wallet and manage the BITR allowance
    #[command(subcommand)]
    Wallet(WalletCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `bitredict create`.
#[derive(Subcommand, Debug)]
pub enum CreateCommand {
    /// Market on the result of a football fixture.
    Football(Box<FootballArgs>),
    /// Market on a cryptocurrency price target.
    Crypto(Box<CryptoArgs>),
}

/// Subcommands for `bitredict wallet`.
#[derive(Subcommand, Debug)]
pub enum WalletCommand {
    /// Display the wallet address derived from the private key.
    Address,
    /// Display the BITR balance and the pool allowance.
    Allowance,
    /// Approve the pool to spend BITR.
    Approve(WalletApproveArgs),
}

/// Subcommands for `bitredict check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration and print the effective settings.
    Config,
}

/// Currency the creator stake is paid in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum PaymentArg {
    /// Native chain currency
    #[default]
    Native,
    /// BITR token (requires an allowance)
    Bitr,
}

impl From<PaymentArg> for PaymentToken {
    fn from(arg: PaymentArg) -> Self {
        match arg {
            PaymentArg::Native => Self::Native,
            PaymentArg::Bitr => Self::Bitr,
        }
    }
}

/// Direction of a price prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DirectionArg {
    Above,
    Below,
}

impl From<DirectionArg> for PriceDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Above => Self::Above,
            DirectionArg::Below => Self::Below,
        }
    }
}

/// Fields shared by every market kind.
#[derive(Args, Debug)]
pub struct TermsArgs {
    /// Outcome the creator predicts
    #[arg(long)]
    pub predicted_outcome: String,

    /// Decimal odds offered to bettors, e.g. 1.75
    #[arg(long)]
    pub odds: Decimal,

    /// Creator stake in whole tokens
    #[arg(long)]
    pub stake: Decimal,

    /// Currency the stake is paid in
    #[arg(long, value_enum, default_value_t = PaymentArg::Native)]
    pub pay_with: PaymentArg,

    /// Free-text market description
    #[arg(long)]
    pub description: Option<String>,

    /// Only reachable through a direct link
    #[arg(long)]
    pub private: bool,

    /// Per-user bet cap in whole tokens
    #[arg(long)]
    pub max_bet_per_user: Option<Decimal>,

    /// Sign without prompting
    #[arg(short, long)]
    pub yes: bool,
}

impl TermsArgs {
    #[must_use]
    pub fn to_terms(&self) -> MarketTerms {
        MarketTerms {
            predicted_outcome: self.predicted_outcome.clone(),
            odds: self.odds,
            creator_stake: self.stake,
            payment: self.pay_with.into(),
            description: self.description.clone(),
            is_private: self.private,
            max_bet_per_user: self.max_bet_per_user,
        }
    }
}

/// Arguments for `bitredict create football`.
#[derive(Args, Debug)]
pub struct FootballArgs {
    /// Fixture id from the sports data provider
    #[arg(long)]
    pub fixture_id: String,

    #[arg(long)]
    pub home_team: String,

    #[arg(long)]
    pub away_team: String,

    #[arg(long)]
    pub league: String,

    /// Kick-off time (RFC 3339), e.g. 2026-11-01T15:00:00Z
    #[arg(long)]
    pub match_date: DateTime<Utc>,

    /// Market type on the fixture
    #[arg(long, default_value = "1X2")]
    pub outcome: String,

    #[command(flatten)]
    pub terms: TermsArgs,
}

impl FootballArgs {
    #[must_use]
    pub fn to_request(&self) -> FootballMarketRequest {
        FootballMarketRequest {
            fixture_id: self.fixture_id.clone(),
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            league: self.league.clone(),
            match_date: self.match_date,
            outcome: self.outcome.clone(),
            terms: self.terms.to_terms(),
        }
    }
}

/// Arguments for `bitredict create crypto`.
#[derive(Args, Debug)]
pub struct CryptoArgs {
    /// Ticker symbol, e.g. BTC
    #[arg(long)]
    pub symbol: String,

    /// Asset name; defaults to the symbol
    #[arg(long)]
    pub name: Option<String>,

    /// Price target in USD
    #[arg(long)]
    pub target_price: Decimal,

    #[arg(long, value_enum)]
    pub direction: DirectionArg,

    /// Resolution horizon, e.g. 1h, 1d, 1w
    #[arg(long)]
    pub timeframe: String,

    #[command(flatten)]
    pub terms: TermsArgs,
}

impl CryptoArgs {
    #[must_use]
    pub fn to_request(&self) -> CryptoMarketRequest {
        CryptoMarketRequest {
            cryptocurrency: Cryptocurrency::new(
                self.symbol.clone(),
                self.name.clone().unwrap_or_else(|| self.symbol.clone()),
            ),
            target_price: self.target_price,
            direction: self.direction.into(),
            timeframe: self.timeframe.clone(),
            terms: self.terms.to_terms(),
        }
    }
}

/// Arguments for `bitredict wallet approve`.
#[derive(Args, Debug)]
pub struct WalletApproveArgs {
    /// Allowance to grant, in whole BITR
    #[arg(long)]
    pub amount: Decimal,

    /// Sign without prompting
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn football_args_build_request() {
        let cli = Cli::try_parse_from([
            "bitredict",
            "create",
            "football",
            "--fixture-id",
            "19427455",
            "--home-team",
            "Arsenal",
            "--away-team",
            "Chelsea",
            "--league",
            "Premier League",
            "--match-date",
            "2026-11-01T15:00:00Z",
            "--predicted-outcome",
            "Home wins",
            "--odds",
            "1.75",
            "--stake",
            "100",
            "--pay-with",
            "bitr",
            "--private",
        ])
        .unwrap();

        let Commands::Create(CreateCommand::Football(args)) = cli.command else {
            panic!("expected create football");
        };
        let request = args.to_request();
        assert_eq!(request.outcome, "1X2");
        assert_eq!(request.terms.odds, dec!(1.75));
        assert_eq!(request.terms.payment, PaymentToken::Bitr);
        assert!(request.terms.is_private);
        assert!(!args.terms.yes);
    }

    #[test]
    fn crypto_name_defaults_to_symbol() {
        let cli = Cli::try_parse_from([
            "bitredict",
            "--json",
            "create",
            "crypto",
            "--symbol",
            "BTC",
            "--target-price",
            "150000",
            "--direction",
            "below",
            "--timeframe",
            "1w",
            "--predicted-outcome",
            "BTC stays below",
            "--odds",
            "2",
            "--stake",
            "10",
            "--yes",
        ])
        .unwrap();

        assert!(cli.json);
        let Commands::Create(CreateCommand::Crypto(args)) = cli.command else {
            panic!("expected create crypto");
        };
        let request = args.to_request();
        assert_eq!(request.cryptocurrency.name, "BTC");
        assert_eq!(request.direction, PriceDirection::Below);
        assert_eq!(request.terms.payment, PaymentToken::Native);
        assert!(args.terms.yes);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli =
            Cli::try_parse_from(["bitredict", "check", "config", "-vv", "--config", "x.toml"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn bad_decimal_is_rejected() {
        let result =
            Cli::try_parse_from(["bitredict", "wallet", "approve", "--amount", "lots"]);
        assert!(result.is_err());
    }
}
