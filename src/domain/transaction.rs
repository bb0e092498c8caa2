//! Server-prepared transactions.
//!
//! The backend turns a [`MarketCreationRequest`](super::market::MarketCreationRequest)
//! into a [`PreparedTransaction`]: the target contract, a typed pool call,
//! the native value, a gas limit and the token economics needed for the BITR
//! approval. The wire payload is validated into this shape once, at the
//! preparation boundary, so later stages never look at loose JSON.

use alloy_primitives::{Address, B256, U256};

use super::id::MarketId;
use super::market::MarketKind;

/// Arguments of `createPool` on the Bitredict pool contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePoolArgs {
    pub predicted_outcome: B256,
    pub odds: U256,
    pub creator_stake: U256,
    pub event_start_time: U256,
    pub event_end_time: U256,
    pub league: String,
    pub category: String,
    pub region: String,
    pub is_private: bool,
    pub max_bet_per_user: U256,
    pub use_bitr: bool,
    pub oracle_type: u8,
    pub market_id: B256,
}

/// Pool contract calls the backend may prepare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolCall {
    CreatePool(CreatePoolArgs),
}

impl PoolCall {
    /// Solidity function name, as reported by the backend.
    #[must_use]
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::CreatePool(_) => "createPool",
        }
    }

    /// Whether the call pulls its stake in BITR rather than native value.
    #[must_use]
    pub const fn uses_bitr(&self) -> bool {
        match self {
            Self::CreatePool(args) => args.use_bitr,
        }
    }
}

/// Market details echoed back to the backend at confirmation.
///
/// Only `marketId` is read locally; the rest of the object is carried
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketDetails {
    market_id: MarketId,
    raw: serde_json::Value,
}

impl MarketDetails {
    pub fn new(market_id: MarketId, raw: serde_json::Value) -> Self {
        Self { market_id, raw }
    }

    #[must_use]
    pub fn market_id(&self) -> &MarketId {
        &self.market_id
    }

    /// The object exactly as the backend produced it.
    #[must_use]
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }
}

/// A validated transaction descriptor produced by the preparation step.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTransaction {
    /// Market kind the backend prepared this for.
    pub kind: MarketKind,
    /// Pool contract to call.
    pub contract_address: Address,
    /// Typed call and arguments.
    pub call: PoolCall,
    /// Native value to attach, in wei.
    pub value: U256,
    /// Gas limit, taken verbatim from the backend estimate.
    pub gas_limit: u64,
    /// BITR needed for the approval (stake plus creation fee), in wei.
    pub total_required_wei: Option<U256>,
    /// Creation fee alone, in wei.
    pub creation_fee_wei: Option<U256>,
    /// Payload to echo back at confirmation.
    pub market_details: MarketDetails,
}

impl PreparedTransaction {
    #[must_use]
    pub fn market_id(&self) -> &MarketId {
        self.market_details.market_id()
    }
}
