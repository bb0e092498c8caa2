//! Scripted guided-market backend.

use std::collections::VecDeque;
use std::sync::Arc;

use alloy_primitives::TxHash;
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::market::{MarketCreationRequest, MarketKind};
use crate::domain::transaction::{MarketDetails, PreparedTransaction};
use crate::port::outbound::backend::{BackendError, MarketBackend};

/// A confirmation the backend received.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmCall {
    pub kind: MarketKind,
    pub transaction_hash: TxHash,
    pub details: MarketDetails,
}

#[derive(Default)]
struct State {
    prepare_results: VecDeque<Result<PreparedTransaction, BackendError>>,
    confirm_results: VecDeque<Result<(), BackendError>>,
    prepared: Vec<MarketCreationRequest>,
    confirmed: Vec<ConfirmCall>,
}

/// Backend whose responses are queued up front.
///
/// `prepare` fails with a transport error when its queue is empty;
/// `confirm` succeeds when its queue is empty.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    state: Arc<Mutex<State>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prepared(self, prepared: PreparedTransaction) -> Self {
        self.state.lock().prepare_results.push_back(Ok(prepared));
        self
    }

    pub fn with_prepare_error(self, err: BackendError) -> Self {
        self.state.lock().prepare_results.push_back(Err(err));
        self
    }

    pub fn with_confirm_error(self, err: BackendError) -> Self {
        self.state.lock().confirm_results.push_back(Err(err));
        self
    }

    pub fn prepare_calls(&self) -> Vec<MarketCreationRequest> {
        self.state.lock().prepared.clone()
    }

    pub fn confirm_calls(&self) -> Vec<ConfirmCall> {
        self.state.lock().confirmed.clone()
    }
}

#[async_trait]
impl MarketBackend for ScriptedBackend {
    async fn prepare(
        &self,
        request: &MarketCreationRequest,
    ) -> Result<PreparedTransaction, BackendError> {
        let mut state = self.state.lock();
        state.prepared.push(request.clone());
        state
            .prepare_results
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Transport("no scripted response".into())))
    }

    async fn confirm(
        &self,
        kind: MarketKind,
        transaction_hash: TxHash,
        details: &MarketDetails,
    ) -> Result<(), BackendError> {
        let mut state = self.state.lock();
        state.confirmed.push(ConfirmCall {
            kind,
            transaction_hash,
            details: details.clone(),
        });
        state.confirm_results.pop_front().unwrap_or(Ok(()))
    }
}
