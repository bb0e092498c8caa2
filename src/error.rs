use thiserror::Error;

use crate::application::creation::approval::ApprovalError;
use crate::domain::error::DomainError;
use crate::port::outbound::backend::BackendError;
use crate::port::outbound::chain::WalletError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("approval failed: {0}")]
    Approval(#[from] ApprovalError),
}

pub type Result<T> = std::result::Result<T, Error>;
