//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend-assigned market identifier.
///
/// The backend hands this out during preparation and expects it back in
/// the confirmation payload. It is kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketId(String);

impl MarketId {
    /// Create a new `MarketId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the market ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MarketId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for MarketId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_id_displays_inner_value() {
        let id = MarketId::new("0xabc");
        assert_eq!(id.to_string(), "0xabc");
        assert_eq!(id.as_str(), "0xabc");
    }

    #[test]
    fn market_id_from_conversions_agree() {
        assert_eq!(MarketId::from("42"), MarketId::from(String::from("42")));
    }
}
