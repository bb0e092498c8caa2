//! Domain validation errors for market creation requests.
//!
//! These errors are returned by `validate` on the request types before any
//! network or wallet call is made.
//!
//! # Examples
//!
//! ```
//! use bitredict::domain::error::DomainError;
//! use bitredict::domain::market::{CryptoMarketRequest, Cryptocurrency, PriceDirection};
//! use bitredict::domain::market::{MarketTerms, PaymentToken};
//! use rust_decimal_macros::dec;
//!
//! let request = CryptoMarketRequest {
//!     cryptocurrency: Cryptocurrency::new("BTC", "Bitcoin"),
//!     target_price: dec!(0),
//!     direction: PriceDirection::Above,
//!     timeframe: "1d".into(),
//!     terms: MarketTerms::new("yes", dec!(2.0), dec!(100), PaymentToken::Native),
//! };
//!
//! assert!(matches!(request.validate(), Err(DomainError::NonPositiveTargetPrice { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when a creation request violates a domain rule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required text field was empty or whitespace.
    #[error("{field} cannot be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Odds are expressed as a decimal multiplier in (1, 100].
    #[error("odds must be greater than 1 and at most 100, got {odds}")]
    OddsOutOfRange {
        /// The rejected odds.
        odds: Decimal,
    },

    /// The creator stake must be positive.
    #[error("creator stake must be positive, got {stake}")]
    NonPositiveStake {
        /// The rejected stake.
        stake: Decimal,
    },

    /// Crypto markets need a positive price target.
    #[error("target price must be positive, got {price}")]
    NonPositiveTargetPrice {
        /// The rejected target price.
        price: Decimal,
    },

    /// The per-user bet cap, when set, must be positive.
    #[error("max bet per user must be positive, got {limit}")]
    NonPositiveBetLimit {
        /// The rejected limit.
        limit: Decimal,
    },
}
