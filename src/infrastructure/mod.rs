//! Infrastructure: configuration, logging, wiring and the operator.

pub mod bootstrap;
pub mod config;
pub mod operator;
