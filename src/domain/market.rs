//! Market creation requests.
//!
//! A [`MarketCreationRequest`] is the user's intent: which event the market
//! is about, what the creator predicts, how much they stake and in which
//! currency. Requests are immutable once handed to the orchestrator.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Upper bound for decimal odds accepted by the pool.
const MAX_ODDS: Decimal = Decimal::ONE_HUNDRED;

/// Currency the creator stake is paid in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentToken {
    /// The chain's native currency, sent as transaction value.
    #[default]
    Native,
    /// The platform BITR token, which requires an ERC-20 allowance.
    Bitr,
}

impl PaymentToken {
    /// Whether this payment path goes through the BITR approval guard.
    #[must_use]
    pub const fn uses_bitr(self) -> bool {
        matches!(self, Self::Bitr)
    }
}

/// Which kind of guided market is being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketKind {
    Football,
    Crypto,
}

impl MarketKind {
    /// Path segment the backend uses for this market kind.
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Crypto => "cryptocurrency",
        }
    }

    /// Human-readable label used in status messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Crypto => "cryptocurrency",
        }
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Football => write!(f, "football"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

/// Fields shared by every guided market, whatever the underlying event.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketTerms {
    /// Outcome the creator predicts will NOT happen (pool semantics).
    pub predicted_outcome: String,
    /// Decimal odds offered to bettors.
    pub odds: Decimal,
    /// Creator stake in whole token units.
    pub creator_stake: Decimal,
    /// Currency the stake is paid in.
    pub payment: PaymentToken,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Private pools are only visible through a direct link.
    pub is_private: bool,
    /// Optional per-user bet cap in whole token units.
    pub max_bet_per_user: Option<Decimal>,
}

impl MarketTerms {
    /// Create public terms with no description and no bet cap.
    pub fn new(
        predicted_outcome: impl Into<String>,
        odds: Decimal,
        creator_stake: Decimal,
        payment: PaymentToken,
    ) -> Self {
        Self {
            predicted_outcome: predicted_outcome.into(),
            odds,
            creator_stake,
            payment,
            description: None,
            is_private: false,
            max_bet_per_user: None,
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        require_text("predicted_outcome", &self.predicted_outcome)?;
        if self.odds <= Decimal::ONE || self.odds > MAX_ODDS {
            return Err(DomainError::OddsOutOfRange { odds: self.odds });
        }
        if self.creator_stake <= Decimal::ZERO {
            return Err(DomainError::NonPositiveStake {
                stake: self.creator_stake,
            });
        }
        if let Some(limit) = self.max_bet_per_user {
            if limit <= Decimal::ZERO {
                return Err(DomainError::NonPositiveBetLimit { limit });
            }
        }
        Ok(())
    }
}

/// A market on the result of a football fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FootballMarketRequest {
    pub fixture_id: String,
    pub home_team: String,
    pub away_team: String,
    pub league: String,
    pub match_date: DateTime<Utc>,
    /// Market type on the fixture, e.g. `1X2` or `OU25`.
    pub outcome: String,
    pub terms: MarketTerms,
}

impl FootballMarketRequest {
    /// Check the request against the domain rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("fixture_id", &self.fixture_id)?;
        require_text("home_team", &self.home_team)?;
        require_text("away_team", &self.away_team)?;
        require_text("league", &self.league)?;
        require_text("outcome", &self.outcome)?;
        self.terms.validate()
    }
}

/// Direction of a crypto price prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    Above,
    Below,
}

/// Asset a crypto market tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cryptocurrency {
    pub symbol: String,
    pub name: String,
}

impl Cryptocurrency {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
        }
    }
}

/// A market on whether an asset ends above or below a target price.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoMarketRequest {
    pub cryptocurrency: Cryptocurrency,
    pub target_price: Decimal,
    pub direction: PriceDirection,
    /// Resolution horizon, e.g. `1h`, `1d`, `1w`.
    pub timeframe: String,
    pub terms: MarketTerms,
}

impl CryptoMarketRequest {
    /// Check the request against the domain rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("cryptocurrency.symbol", &self.cryptocurrency.symbol)?;
        require_text("timeframe", &self.timeframe)?;
        if self.target_price <= Decimal::ZERO {
            return Err(DomainError::NonPositiveTargetPrice {
                price: self.target_price,
            });
        }
        self.terms.validate()
    }
}

/// User intent for one guided market.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketCreationRequest {
    Football(FootballMarketRequest),
    Crypto(CryptoMarketRequest),
}

impl MarketCreationRequest {
    #[must_use]
    pub const fn kind(&self) -> MarketKind {
        match self {
            Self::Football(_) => MarketKind::Football,
            Self::Crypto(_) => MarketKind::Crypto,
        }
    }

    #[must_use]
    pub const fn terms(&self) -> &MarketTerms {
        match self {
            Self::Football(request) => &request.terms,
            Self::Crypto(request) => &request.terms,
        }
    }

    #[must_use]
    pub const fn payment(&self) -> PaymentToken {
        self.terms().payment
    }

    /// Validate the variant-specific rules.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::Football(request) => request.validate(),
            Self::Crypto(request) => request.validate(),
        }
    }
}

impl From<FootballMarketRequest> for MarketCreationRequest {
    fn from(request: FootballMarketRequest) -> Self {
        Self::Football(request)
    }
}

impl From<CryptoMarketRequest> for MarketCreationRequest {
    fn from(request: CryptoMarketRequest) -> Self {
        Self::Crypto(request)
    }
}

fn require_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}
