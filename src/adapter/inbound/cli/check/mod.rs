//! Configuration validation command handlers.

pub mod config;
