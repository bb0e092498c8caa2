//! Bitredict - guided prediction-market creation.
//!
//! Creates football and cryptocurrency prediction markets on the Bitredict
//! pool contract. The backend prepares a ready-to-sign `createPool` call;
//! the crate validates it, secures a BITR allowance when the stake is paid
//! in BITR, sends the transaction from a local key, waits for the receipt
//! and asks the backend to index the new market.
//!
//! # Architecture
//!
//! Hexagonal, with the creation flow independent of any transport:
//!
//! - [`domain`] - requests, prepared transactions, status events, outcomes
//! - [`port`] - operator use cases inbound; backend, wallet, chain, prompt
//!   and status traits outbound
//! - [`application`] - approval guard, transaction executor, orchestrator
//! - [`adapter`] - reqwest backend client, alloy wallet, clap CLI
//! - [`infrastructure`] - configuration, logging, wiring and the operator
//!   the CLI drives
//! - [`error`] - crate-level error types
//!
//! # Example
//!
//! ```no_run
//! use bitredict::domain::market::MarketCreationRequest;
//! use bitredict::domain::status::StatusEvent;
//! use bitredict::infrastructure::bootstrap;
//! use bitredict::infrastructure::config::settings::Config;
//!
//! # async fn run(request: MarketCreationRequest) -> bitredict::error::Result<()> {
//! let config = Config::load("bitredict.toml")?;
//! let context = bootstrap::signing_context(&config, None)?;
//! let creator = bootstrap::market_creator(&config, context);
//!
//! let outcome = creator
//!     .create(&request, &|event: StatusEvent| println!("{}: {}", event.title, event.message))
//!     .await;
//! println!("{}", outcome.to_json());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
