//! Exchange-agnostic domain types for guided market creation.

pub mod error;
pub mod id;
pub mod market;
pub mod outcome;
pub mod status;
pub mod transaction;
