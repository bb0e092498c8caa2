//! Unified operator capability surface for inbound adapters.

use super::configuration::ConfigurationOperator;
use super::creation::CreationOperator;
use super::wallet::WalletOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + CreationOperator + WalletOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + CreationOperator + WalletOperator {}
