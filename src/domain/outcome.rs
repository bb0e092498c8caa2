//! Terminal results of a market creation.

use alloy_primitives::TxHash;
use serde_json::{json, Value};

use super::id::MarketId;

/// Stage at which a creation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    /// Nothing happened on-chain.
    Preparation,
    /// The approval was rejected or reverted; the main call never ran.
    Approval,
    /// The main call failed. A prior approval, if any, stays in place.
    Execution,
}

impl std::fmt::Display for FailureStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preparation => write!(f, "preparation"),
            Self::Approval => write!(f, "approval"),
            Self::Execution => write!(f, "execution"),
        }
    }
}

/// Exactly one of these is produced per creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationOutcome {
    /// The pool transaction succeeded on-chain. Backend indexing may still
    /// have failed; that is reported through status events only.
    Created {
        transaction_hash: TxHash,
        market_id: MarketId,
    },
    /// The attempt stopped before the pool transaction succeeded.
    Failed { stage: FailureStage, error: String },
}

impl CreationOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    #[must_use]
    pub const fn transaction_hash(&self) -> Option<&TxHash> {
        match self {
            Self::Created {
                transaction_hash, ..
            } => Some(transaction_hash),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn market_id(&self) -> Option<&MarketId> {
        match self {
            Self::Created { market_id, .. } => Some(market_id),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Created { .. } => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// `{success, transactionHash, marketId}` or `{success, error}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Created {
                transaction_hash,
                market_id,
            } => json!({
                "success": true,
                "transactionHash": transaction_hash.to_string(),
                "marketId": market_id.as_str(),
            }),
            Self::Failed { error, .. } => json!({
                "success": false,
                "error": error,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_render_lowercase() {
        assert_eq!(FailureStage::Preparation.to_string(), "preparation");
        assert_eq!(FailureStage::Execution.to_string(), "execution");
    }

    #[test]
    fn created_outcome_accessors() {
        let outcome = CreationOutcome::Created {
            transaction_hash: TxHash::repeat_byte(0xab),
            market_id: MarketId::new("m-1"),
        };

        assert!(outcome.is_success());
        assert_eq!(outcome.market_id().unwrap().as_str(), "m-1");
        assert!(outcome.error().is_none());

        let json = outcome.to_json();
        assert_eq!(json["success"], true);
        assert_eq!(json["marketId"], "m-1");
        assert!(json["transactionHash"].as_str().unwrap().starts_with("0xabab"));
    }

    #[test]
    fn failed_outcome_accessors() {
        let outcome = CreationOutcome::Failed {
            stage: FailureStage::Approval,
            error: "BITR approval failed: User rejected BITR approval".into(),
        };

        assert!(!outcome.is_success());
        assert!(outcome.transaction_hash().is_none());
        assert_eq!(
            outcome.to_json(),
            json!({
                "success": false,
                "error": "BITR approval failed: User rejected BITR approval",
            })
        );
    }
}
