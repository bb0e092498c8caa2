//! Command-line adapter.
//!
//! Handlers reach the application only through the installed
//! [`operator`] port.

pub mod check;
pub mod command;
pub mod create;
pub mod operator;
pub mod output;
pub mod prompt;
pub mod run;
pub mod status;
pub mod wallet;
