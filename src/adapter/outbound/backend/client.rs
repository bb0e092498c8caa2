//! HTTP client for the guided-market backend.
//!
//! Two calls per market kind:
//! - `POST /api/guided-markets/{route}/prepare` returns the transaction to sign
//! - `POST /api/guided-markets/{route}/confirm` indexes a mined market
//!
//! Each call is attempted once; retry policy belongs to the caller.

use std::time::Duration;

use alloy_primitives::TxHash;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::dto::{prepare_body, ApiEnvelope, ConfirmBody, PreparedTransactionDto};
use super::settings::BackendConfig;
use crate::domain::market::{MarketCreationRequest, MarketKind};
use crate::domain::transaction::{MarketDetails, PreparedTransaction};
use crate::port::outbound::backend::{BackendError, MarketBackend};

/// Guided-market backend over HTTP.
pub struct HttpMarketBackend {
    http: HttpClient,
    base_url: String,
}

impl HttpMarketBackend {
    /// Create a client with default timeouts.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Endpoint URL for `action` on `kind`.
    #[must_use]
    pub fn endpoint(&self, kind: MarketKind, action: &str) -> String {
        format!(
            "{}/api/guided-markets/{}/{}",
            self.base_url.trim_end_matches('/'),
            kind.route(),
            action
        )
    }

    async fn post<B, T>(&self, url: &str, body: &B) -> Result<Option<T>, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(url = %url, "POST");

        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: ApiEnvelope<T> = serde_json::from_str(&text)
            .map_err(|e| BackendError::InvalidPayload(format!("malformed response: {e}")))?;
        envelope.into_result()
    }
}

#[async_trait]
impl MarketBackend for HttpMarketBackend {
    async fn prepare(
        &self,
        request: &MarketCreationRequest,
    ) -> Result<PreparedTransaction, BackendError> {
        let kind = request.kind();
        let url = self.endpoint(kind, "prepare");
        let body = prepare_body(request)?;

        let data: Option<PreparedTransactionDto> = self.post(&url, &body).await?;
        let data = data.ok_or_else(|| {
            BackendError::InvalidPayload("response carried no transaction data".into())
        })?;

        data.into_prepared(kind)
    }

    async fn confirm(
        &self,
        kind: MarketKind,
        transaction_hash: TxHash,
        details: &MarketDetails,
    ) -> Result<(), BackendError> {
        let url = self.endpoint(kind, "confirm");
        let body = ConfirmBody::new(transaction_hash, details);

        let _: Option<Value> = self.post(&url, &body).await?;
        Ok(())
    }
}
