//! EVM wallet adapter built on alloy.

pub mod classify;
mod contracts;
pub mod settings;
pub mod wallet;
