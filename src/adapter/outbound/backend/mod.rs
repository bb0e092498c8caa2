//! Guided-market backend adapter.

pub mod client;
pub mod dto;
pub mod settings;
