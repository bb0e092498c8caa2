//! Builders for domain values used across tests.

use alloy_primitives::{Address, B256, U256};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;
use serde_json::json;

use crate::domain::id::MarketId;
use crate::domain::market::{
    CryptoMarketRequest, Cryptocurrency, FootballMarketRequest, MarketKind, MarketTerms,
    PaymentToken, PriceDirection,
};
use crate::domain::transaction::{CreatePoolArgs, MarketDetails, PoolCall, PreparedTransaction};

/// One BITR in wei.
pub const ONE_BITR: u128 = 1_000_000_000_000_000_000;

/// Market id every prepared transaction carries.
pub const MARKET_ID: &str = "0x6d61726b65742d31";

/// A valid football request paying with `payment`.
pub fn football_request(payment: PaymentToken) -> FootballMarketRequest {
    FootballMarketRequest {
        fixture_id: "19427455".into(),
        home_team: "Arsenal".into(),
        away_team: "Chelsea".into(),
        league: "Premier League".into(),
        match_date: Utc
            .with_ymd_and_hms(2026, 11, 1, 15, 0, 0)
            .single()
            .unwrap_or_default(),
        outcome: "1X2".into(),
        terms: MarketTerms::new("Home wins", dec!(1.75), dec!(100), payment),
    }
}

/// A valid crypto request paying with `payment`.
pub fn crypto_request(payment: PaymentToken) -> CryptoMarketRequest {
    CryptoMarketRequest {
        cryptocurrency: Cryptocurrency::new("ETH", "Ethereum"),
        target_price: dec!(5000),
        direction: PriceDirection::Above,
        timeframe: "1w".into(),
        terms: MarketTerms::new("ETH above 5000", dec!(2.5), dec!(20), payment),
    }
}

/// A football `createPool` prepared transaction.
///
/// BITR variants carry a 150 BITR total (100 stake plus 50 fee) and no
/// native value; native variants send the 100 stake as value.
pub fn prepared_transaction(use_bitr: bool) -> PreparedTransaction {
    let stake = U256::from(100 * ONE_BITR);
    let fee = U256::from(50 * ONE_BITR);

    PreparedTransaction {
        kind: MarketKind::Football,
        contract_address: Address::repeat_byte(0xb2),
        call: PoolCall::CreatePool(CreatePoolArgs {
            predicted_outcome: B256::repeat_byte(0x01),
            odds: U256::from(175u64),
            creator_stake: stake,
            event_start_time: U256::from(1_793_545_200u64),
            event_end_time: U256::from(1_793_552_400u64),
            league: "Premier League".into(),
            category: "football".into(),
            region: "England".into(),
            is_private: false,
            max_bet_per_user: U256::ZERO,
            use_bitr,
            oracle_type: 0,
            market_id: B256::repeat_byte(0x02),
        }),
        value: if use_bitr { U256::ZERO } else { stake },
        gas_limit: 2_000_000,
        total_required_wei: use_bitr.then_some(stake + fee),
        creation_fee_wei: Some(fee),
        market_details: MarketDetails::new(
            MarketId::new(MARKET_ID),
            json!({ "marketId": MARKET_ID, "fixtureId": "19427455" }),
        ),
    }
}
