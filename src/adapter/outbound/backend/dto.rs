//! Wire types for the guided-market backend.
//!
//! Requests are serialized in the backend's camelCase shape. Prepare
//! responses arrive loosely typed (`parameters` is a JSON array) and are
//! validated into a [`PreparedTransaction`] here, once.
//!
//! Example prepare response:
//! ```json
//! {"success":true,"data":{"contractAddress":"0x...","functionName":"createPool",
//!  "parameters":["0x..","175","100000000000000000000",...],"value":"0",
//!  "gasEstimate":"2000000","totalRequiredWei":"150000000000000000000",
//!  "creationFeeWei":"50000000000000000000","marketDetails":{"marketId":"0x.."}}}
//! ```

use std::str::FromStr;

use alloy_primitives::utils::parse_ether;
use alloy_primitives::{Address, TxHash, B256, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::id::MarketId;
use crate::domain::market::{
    CryptoMarketRequest, FootballMarketRequest, MarketCreationRequest, MarketKind, PriceDirection,
};
use crate::domain::transaction::{CreatePoolArgs, MarketDetails, PoolCall, PreparedTransaction};
use crate::port::outbound::backend::BackendError;

/// Number of arguments `createPool` takes.
const CREATE_POOL_ARITY: usize = 13;

/// Response envelope shared by every guided-market endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// The payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Rejected`] when `success` is false.
    pub fn into_result(self) -> Result<Option<T>, BackendError> {
        if self.success {
            return Ok(self.data);
        }
        let reason = self
            .error
            .or(self.message)
            .unwrap_or_else(|| "Unknown error".to_string());
        Err(BackendError::Rejected(reason))
    }
}

/// Football prepare request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FootballMarketBody<'a> {
    pub fixture_id: &'a str,
    pub home_team: &'a str,
    pub away_team: &'a str,
    pub league: &'a str,
    pub match_date: String,
    pub outcome: &'a str,
    pub predicted_outcome: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub odds: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub creator_stake: Decimal,
    pub use_bitr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub is_private: bool,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_bet_per_user: Option<Decimal>,
}

impl<'a> From<&'a FootballMarketRequest> for FootballMarketBody<'a> {
    fn from(request: &'a FootballMarketRequest) -> Self {
        let terms = &request.terms;
        Self {
            fixture_id: &request.fixture_id,
            home_team: &request.home_team,
            away_team: &request.away_team,
            league: &request.league,
            match_date: request.match_date.to_rfc3339(),
            outcome: &request.outcome,
            predicted_outcome: &terms.predicted_outcome,
            odds: terms.odds,
            creator_stake: terms.creator_stake,
            use_bitr: terms.payment.uses_bitr(),
            description: terms.description.as_deref(),
            is_private: terms.is_private,
            max_bet_per_user: terms.max_bet_per_user,
        }
    }
}

/// Asset block of a crypto prepare request.
#[derive(Debug, Serialize)]
pub struct CryptocurrencyBody<'a> {
    pub symbol: &'a str,
    pub name: &'a str,
}

/// Crypto prepare request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoMarketBody<'a> {
    pub cryptocurrency: CryptocurrencyBody<'a>,
    #[serde(with = "rust_decimal::serde::float")]
    pub target_price: Decimal,
    pub direction: PriceDirection,
    pub timeframe: &'a str,
    pub predicted_outcome: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub odds: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub creator_stake: Decimal,
    pub use_bitr: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub is_private: bool,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_bet_per_user: Option<Decimal>,
}

impl<'a> From<&'a CryptoMarketRequest> for CryptoMarketBody<'a> {
    fn from(request: &'a CryptoMarketRequest) -> Self {
        let terms = &request.terms;
        Self {
            cryptocurrency: CryptocurrencyBody {
                symbol: &request.cryptocurrency.symbol,
                name: &request.cryptocurrency.name,
            },
            target_price: request.target_price,
            direction: request.direction,
            timeframe: &request.timeframe,
            predicted_outcome: &terms.predicted_outcome,
            odds: terms.odds,
            creator_stake: terms.creator_stake,
            use_bitr: terms.payment.uses_bitr(),
            description: terms.description.as_deref(),
            is_private: terms.is_private,
            max_bet_per_user: terms.max_bet_per_user,
        }
    }
}

/// Serialize the prepare body for either market kind.
///
/// # Errors
///
/// Returns [`BackendError::InvalidPayload`] if serialization fails.
pub fn prepare_body(request: &MarketCreationRequest) -> Result<Value, BackendError> {
    let body = match request {
        MarketCreationRequest::Football(football) => {
            serde_json::to_value(FootballMarketBody::from(football))
        }
        MarketCreationRequest::Crypto(crypto) => {
            serde_json::to_value(CryptoMarketBody::from(crypto))
        }
    };
    body.map_err(|e| BackendError::InvalidPayload(e.to_string()))
}

/// Confirmation request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmBody<'a> {
    pub transaction_hash: String,
    pub market_details: &'a Value,
}

impl<'a> ConfirmBody<'a> {
    pub fn new(transaction_hash: TxHash, details: &'a MarketDetails) -> Self {
        Self {
            transaction_hash: transaction_hash.to_string(),
            market_details: details.raw(),
        }
    }
}

/// `data` of a prepare response, as sent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransactionDto {
    pub contract_address: String,
    pub function_name: String,
    #[serde(default)]
    pub parameters: Vec<Value>,
    pub value: Value,
    pub gas_estimate: Value,
    pub total_required_wei: Option<Value>,
    pub creation_fee_wei: Option<Value>,
    pub market_details: Value,
}

impl PreparedTransactionDto {
    /// Validate into a typed transaction for `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::InvalidPayload`] naming the first field that
    /// does not parse.
    pub fn into_prepared(self, kind: MarketKind) -> Result<PreparedTransaction, BackendError> {
        self.validate(kind).map_err(BackendError::InvalidPayload)
    }

    fn validate(self, kind: MarketKind) -> Result<PreparedTransaction, String> {
        let contract_address = Address::from_str(self.contract_address.trim())
            .map_err(|e| format!("contractAddress: {e}"))?;

        let call = match self.function_name.as_str() {
            "createPool" => PoolCall::CreatePool(create_pool_args(&self.parameters)?),
            other => return Err(format!("unsupported function {other}")),
        };

        let value = native_value(&self.value)?;
        let gas_limit = gas_limit(&self.gas_estimate)?;
        let total_required_wei = self
            .total_required_wei
            .as_ref()
            .map(|v| uint(v, "totalRequiredWei"))
            .transpose()?;
        let creation_fee_wei = self
            .creation_fee_wei
            .as_ref()
            .map(|v| uint(v, "creationFeeWei"))
            .transpose()?;

        let market_id = match self.market_details.get("marketId") {
            Some(Value::String(id)) if !id.is_empty() => MarketId::new(id.clone()),
            Some(Value::Number(id)) => MarketId::new(id.to_string()),
            _ => return Err("marketDetails.marketId is missing".into()),
        };

        Ok(PreparedTransaction {
            kind,
            contract_address,
            call,
            value,
            gas_limit,
            total_required_wei,
            creation_fee_wei,
            market_details: MarketDetails::new(market_id, self.market_details),
        })
    }
}

fn create_pool_args(params: &[Value]) -> Result<CreatePoolArgs, String> {
    if params.len() != CREATE_POOL_ARITY {
        return Err(format!(
            "createPool expects {CREATE_POOL_ARITY} parameters, got {}",
            params.len()
        ));
    }

    Ok(CreatePoolArgs {
        predicted_outcome: bytes32(&params[0], "predictedOutcome")?,
        odds: uint(&params[1], "odds")?,
        creator_stake: uint(&params[2], "creatorStake")?,
        event_start_time: uint(&params[3], "eventStartTime")?,
        event_end_time: uint(&params[4], "eventEndTime")?,
        league: text(&params[5], "league")?,
        category: text(&params[6], "category")?,
        region: text(&params[7], "region")?,
        is_private: boolean(&params[8], "isPrivate")?,
        max_bet_per_user: uint(&params[9], "maxBetPerUser")?,
        use_bitr: boolean(&params[10], "useBitr")?,
        oracle_type: small_uint(&params[11], "oracleType")?,
        market_id: bytes32(&params[12], "marketId")?,
    })
}

/// `"0"` means no value; anything else is an ether amount.
pub fn parse_native_value(raw: &str) -> Result<U256, String> {
    let raw = raw.trim();
    if raw == "0" {
        return Ok(U256::ZERO);
    }
    parse_ether(raw).map_err(|e| format!("value {raw:?}: {e}"))
}

fn native_value(value: &Value) -> Result<U256, String> {
    match value {
        Value::String(raw) => parse_native_value(raw),
        Value::Number(n) => parse_native_value(&n.to_string()),
        other => Err(format!("value: expected string, got {other}")),
    }
}

fn gas_limit(value: &Value) -> Result<u64, String> {
    match value {
        Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| format!("gasEstimate {raw:?}: {e}")),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("gasEstimate {n}: not an unsigned integer")),
        other => Err(format!("gasEstimate: expected integer, got {other}")),
    }
}

fn uint(value: &Value, field: &str) -> Result<U256, String> {
    match value {
        Value::String(raw) => {
            let raw = raw.trim();
            let (digits, radix) = match raw.strip_prefix("0x") {
                Some(hex) => (hex, 16),
                None => (raw, 10),
            };
            if digits.is_empty() {
                return Err(format!("{field} {raw:?}: empty integer"));
            }
            U256::from_str_radix(digits, radix).map_err(|e| format!("{field} {raw:?}: {e}"))
        }
        Value::Number(n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| format!("{field} {n}: not an unsigned integer")),
        other => Err(format!("{field}: expected integer, got {other}")),
    }
}

fn small_uint(value: &Value, field: &str) -> Result<u8, String> {
    let wide = uint(value, field)?;
    u8::try_from(wide).map_err(|_| format!("{field} {wide}: out of range for uint8"))
}

fn bytes32(value: &Value, field: &str) -> Result<B256, String> {
    match value {
        Value::String(raw) => B256::from_str(raw.trim()).map_err(|e| format!("{field} {raw:?}: {e}")),
        other => Err(format!("{field}: expected hex string, got {other}")),
    }
}

fn text(value: &Value, field: &str) -> Result<String, String> {
    match value {
        Value::String(raw) => Ok(raw.clone()),
        other => Err(format!("{field}: expected string, got {other}")),
    }
}

fn boolean(value: &Value, field: &str) -> Result<bool, String> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        other => Err(format!("{field}: expected boolean, got {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::PaymentToken;
    use crate::testkit::domain::{crypto_request, football_request, ONE_BITR};
    use serde_json::json;

    fn prepared_json() -> Value {
        json!({
            "contractAddress": "0x080dB155ded47b08D9807ad38Be550784D4Df1e6",
            "functionName": "createPool",
            "parameters": [
                format!("0x{}", "11".repeat(32)),
                "175",
                "100000000000000000000",
                1_793_545_200u64,
                "1793552400",
                "Premier League",
                "football",
                "England",
                false,
                "0",
                true,
                0,
                format!("0x{}", "22".repeat(32)),
            ],
            "value": "0",
            "gasEstimate": "2000000",
            "totalRequiredWei": "150000000000000000000",
            "creationFeeWei": "0x2b5e3af16b1880000",
            "marketDetails": { "marketId": "0xabc", "homeTeam": "Arsenal" }
        })
    }

    fn dto(value: Value) -> PreparedTransactionDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn valid_payload_becomes_typed_transaction() {
        let prepared = dto(prepared_json())
            .into_prepared(MarketKind::Football)
            .unwrap();

        assert_eq!(prepared.kind, MarketKind::Football);
        assert_eq!(prepared.value, U256::ZERO);
        assert_eq!(prepared.gas_limit, 2_000_000);
        assert_eq!(prepared.total_required_wei, Some(U256::from(150 * ONE_BITR)));
        assert_eq!(prepared.creation_fee_wei, Some(U256::from(50 * ONE_BITR)));
        assert_eq!(prepared.market_id().as_str(), "0xabc");
        assert_eq!(prepared.market_details.raw()["homeTeam"], "Arsenal");

        let PoolCall::CreatePool(args) = &prepared.call;
        assert_eq!(args.creator_stake, U256::from(100 * ONE_BITR));
        assert_eq!(args.event_start_time, U256::from(1_793_545_200u64));
        assert!(args.use_bitr);
        assert_eq!(args.oracle_type, 0);
        assert_eq!(args.market_id, B256::repeat_byte(0x22));
    }

    #[test]
    fn non_zero_value_is_parsed_as_ether() {
        let mut json = prepared_json();
        json["value"] = json!("1.5");
        let prepared = dto(json).into_prepared(MarketKind::Football).unwrap();
        assert_eq!(prepared.value, U256::from(1_500_000_000_000_000_000u128));
    }

    #[test]
    fn literal_zero_is_zero_value() {
        assert_eq!(parse_native_value("0"), Ok(U256::ZERO));
        assert_eq!(parse_native_value("0.0"), Ok(U256::ZERO));
        assert!(parse_native_value("abc").is_err());
    }

    #[test]
    fn unknown_function_is_rejected() {
        let mut json = prepared_json();
        json["functionName"] = json!("selfdestruct");
        let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
        assert_eq!(
            err,
            BackendError::InvalidPayload("unsupported function selfdestruct".into())
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let mut json = prepared_json();
        json["parameters"].as_array_mut().unwrap().pop();
        let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
        assert!(err.to_string().contains("expects 13 parameters, got 12"));
    }

    #[test]
    fn mistyped_argument_names_field() {
        let mut json = prepared_json();
        json["parameters"][8] = json!("false");
        let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
        assert!(err.to_string().contains("isPrivate"));
    }

    #[test]
    fn empty_integers_are_rejected() {
        for blank in ["", "  ", "0x"] {
            let mut json = prepared_json();
            json["totalRequiredWei"] = json!(blank);
            let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
            assert!(err.to_string().contains("totalRequiredWei"), "{blank:?}: {err}");
            assert!(err.to_string().contains("empty integer"));

            let mut json = prepared_json();
            json["parameters"][2] = json!(blank);
            let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
            assert!(err.to_string().contains("creatorStake"), "{blank:?}: {err}");
        }
    }

    #[test]
    fn missing_market_id_is_rejected() {
        let mut json = prepared_json();
        json["marketDetails"] = json!({ "homeTeam": "Arsenal" });
        let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
        assert!(err.to_string().contains("marketId"));
    }

    #[test]
    fn numeric_market_id_is_kept_as_text() {
        let mut json = prepared_json();
        json["marketDetails"] = json!({ "marketId": 42 });
        let prepared = dto(json).into_prepared(MarketKind::Crypto).unwrap();
        assert_eq!(prepared.market_id().as_str(), "42");
    }

    #[test]
    fn bad_gas_estimate_is_rejected() {
        let mut json = prepared_json();
        json["gasEstimate"] = json!("lots");
        assert!(dto(json).into_prepared(MarketKind::Football).is_err());
    }

    #[test]
    fn oracle_type_must_fit_in_a_byte() {
        let mut json = prepared_json();
        json["parameters"][11] = json!(256);
        let err = dto(json).into_prepared(MarketKind::Football).unwrap_err();
        assert!(err.to_string().contains("oracleType"));
    }

    #[test]
    fn football_body_uses_backend_field_names() {
        let request = MarketCreationRequest::Football(football_request(PaymentToken::Bitr));
        let body = prepare_body(&request).unwrap();

        assert_eq!(body["fixtureId"], "19427455");
        assert_eq!(body["homeTeam"], "Arsenal");
        assert_eq!(body["predictedOutcome"], "Home wins");
        assert_eq!(body["odds"], 1.75);
        assert_eq!(body["creatorStake"], 100.0);
        assert_eq!(body["useBitr"], true);
        assert_eq!(body["isPrivate"], false);
        assert!(body.get("description").is_none());
        assert!(body.get("maxBetPerUser").is_none());
        assert!(body["matchDate"].as_str().unwrap().starts_with("2026-11-01T15:00:00"));
    }

    #[test]
    fn crypto_body_nests_asset() {
        let mut crypto = crypto_request(PaymentToken::Native);
        crypto.terms.description = Some("ETH to the moon".into());
        let request = MarketCreationRequest::Crypto(crypto);
        let body = prepare_body(&request).unwrap();

        assert_eq!(body["cryptocurrency"]["symbol"], "ETH");
        assert_eq!(body["cryptocurrency"]["name"], "Ethereum");
        assert_eq!(body["targetPrice"], 5000.0);
        assert_eq!(body["direction"], "above");
        assert_eq!(body["useBitr"], false);
        assert_eq!(body["description"], "ETH to the moon");
    }

    #[test]
    fn rejected_envelope_prefers_error_field() {
        let envelope: ApiEnvelope<Value> =
            serde_json::from_value(json!({ "success": false, "error": "Fixture not found" }))
                .unwrap();
        assert_eq!(
            envelope.into_result().unwrap_err(),
            BackendError::Rejected("Fixture not found".into())
        );

        let envelope: ApiEnvelope<Value> =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert_eq!(
            envelope.into_result().unwrap_err().to_string(),
            "Unknown error"
        );
    }

    #[test]
    fn confirm_body_echoes_details() {
        let details = MarketDetails::new(MarketId::new("m"), json!({ "marketId": "m", "x": 1 }));
        let body = serde_json::to_value(ConfirmBody::new(TxHash::repeat_byte(0x01), &details))
            .unwrap();
        assert_eq!(body["marketDetails"], json!({ "marketId": "m", "x": 1 }));
        assert!(body["transactionHash"].as_str().unwrap().starts_with("0x0101"));
    }
}
