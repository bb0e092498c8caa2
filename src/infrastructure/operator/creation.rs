//! Creation operator implementation.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::market::MarketCreationRequest;
use crate::error::Result;
use crate::infrastructure::{bootstrap, config};
use crate::port::inbound::operator::creation::{CreationOperator, CreationReport};
use crate::port::outbound::prompt::SigningPrompt;
use crate::port::outbound::status::StatusSink;

use super::entry::Operator;

#[async_trait]
impl CreationOperator for Operator {
    async fn create_market(
        &self,
        config_toml: &str,
        request: &MarketCreationRequest,
        prompt: Option<Arc<dyn SigningPrompt>>,
        status: &dyn StatusSink,
    ) -> Result<CreationReport> {
        let config = config::settings::Config::parse_toml(config_toml)?;
        let context = bootstrap::signing_context(&config, prompt)?;
        let account = context.account();

        let creator = bootstrap::market_creator(&config, context);
        let outcome = creator.create(request, status).await;
        let explorer_url = outcome
            .transaction_hash()
            .map(|hash| config.chain.tx_url(&hash.to_string()));

        Ok(CreationReport {
            account,
            outcome,
            explorer_url,
        })
    }
}
