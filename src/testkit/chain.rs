//! Scripted wallet and chain for exercising the creation flow.
//!
//! [`ScriptedChain`] implements both [`WalletSigner`] and [`ChainReader`].
//! Write and receipt outcomes are popped from queues (defaulting to success
//! when exhausted) and every submitted call is recorded.

use std::collections::VecDeque;
use std::sync::Arc;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::application::creation::context::{ContractAddresses, WalletContext};
use crate::port::outbound::chain::{
    ChainReader, ContractCall, ReceiptStatus, WalletError, WalletSigner,
};

#[derive(Default)]
struct State {
    allowance: U256,
    balance: U256,
    read_error: Option<WalletError>,
    write_results: VecDeque<Result<(), WalletError>>,
    receipts: VecDeque<ReceiptStatus>,
    submitted: Vec<ContractCall>,
    allowance_reads: usize,
    receipt_waits: usize,
}

/// In-memory stand-in for a connected wallet and its chain.
#[derive(Clone, Default)]
pub struct ScriptedChain {
    state: Arc<Mutex<State>>,
}

impl ScriptedChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allowance returned by every allowance read.
    pub fn with_allowance(self, allowance: U256) -> Self {
        self.state.lock().allowance = allowance;
        self
    }

    /// Balance returned by every balance read.
    pub fn with_balance(self, balance: U256) -> Self {
        self.state.lock().balance = balance;
        self
    }

    /// Make every read fail with `err`.
    pub fn with_read_error(self, err: WalletError) -> Self {
        self.state.lock().read_error = Some(err);
        self
    }

    /// Queue a successful write.
    pub fn with_write_ok(self) -> Self {
        self.state.lock().write_results.push_back(Ok(()));
        self
    }

    /// Queue a failing write.
    pub fn with_write_error(self, err: WalletError) -> Self {
        self.state.lock().write_results.push_back(Err(err));
        self
    }

    /// Queue a receipt status.
    pub fn with_receipt(self, status: ReceiptStatus) -> Self {
        self.state.lock().receipts.push_back(status);
        self
    }

    /// Account used as the transaction sender.
    pub fn account() -> Address {
        Address::repeat_byte(0xaa)
    }

    /// Contract addresses handed to the flow.
    pub fn contracts(&self) -> ContractAddresses {
        ContractAddresses {
            bitr_token: Address::repeat_byte(0xb1),
            bitr_pool: Address::repeat_byte(0xb2),
        }
    }

    /// Wallet context backed by this chain.
    pub fn context(&self) -> WalletContext {
        WalletContext::new(
            Arc::new(self.clone()),
            Arc::new(self.clone()),
            self.contracts(),
        )
    }

    /// Hash assigned to the `index`-th successful write.
    pub fn hash_for(&self, index: usize) -> TxHash {
        let byte = u8::try_from(index + 1).unwrap_or(u8::MAX);
        TxHash::with_last_byte(byte)
    }

    /// Calls that produced a hash, in submission order.
    pub fn submitted(&self) -> Vec<ContractCall> {
        self.state.lock().submitted.clone()
    }

    pub fn allowance_reads(&self) -> usize {
        self.state.lock().allowance_reads
    }

    pub fn receipt_waits(&self) -> usize {
        self.state.lock().receipt_waits
    }
}

#[async_trait]
impl WalletSigner for ScriptedChain {
    fn account(&self) -> Address {
        Self::account()
    }

    async fn write_contract(&self, call: &ContractCall) -> Result<TxHash, WalletError> {
        let mut state = self.state.lock();
        state.write_results.pop_front().unwrap_or(Ok(()))?;
        state.submitted.push(call.clone());
        let index = state.submitted.len() - 1;
        drop(state);
        Ok(self.hash_for(index))
    }
}

#[async_trait]
impl ChainReader for ScriptedChain {
    async fn allowance(
        &self,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256, WalletError> {
        let mut state = self.state.lock();
        state.allowance_reads += 1;
        if let Some(err) = &state.read_error {
            return Err(err.clone());
        }
        Ok(state.allowance)
    }

    async fn token_balance(&self, _token: Address, _owner: Address) -> Result<U256, WalletError> {
        let state = self.state.lock();
        if let Some(err) = &state.read_error {
            return Err(err.clone());
        }
        Ok(state.balance)
    }

    async fn wait_for_receipt(&self, _hash: TxHash) -> Result<ReceiptStatus, WalletError> {
        let mut state = self.state.lock();
        state.receipt_waits += 1;
        Ok(state.receipts.pop_front().unwrap_or(ReceiptStatus::Success))
    }
}
