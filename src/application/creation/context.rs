//! Wallet context threaded through the creation flow.
//!
//! Bundles the signer, the chain reader and the contract addresses so each
//! step receives them explicitly instead of reaching for a global session.

use std::sync::Arc;

use alloy_primitives::Address;

use crate::port::outbound::chain::{ChainReader, WalletSigner};

/// Deployed contract addresses the flow talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    /// BITR ERC-20 token.
    pub bitr_token: Address,
    /// Bitredict pool; spender of BITR allowances.
    pub bitr_pool: Address,
}

/// Connected wallet plus the chain it lives on.
#[derive(Clone)]
pub struct WalletContext {
    signer: Arc<dyn WalletSigner>,
    reader: Arc<dyn ChainReader>,
    contracts: ContractAddresses,
}

impl WalletContext {
    pub fn new(
        signer: Arc<dyn WalletSigner>,
        reader: Arc<dyn ChainReader>,
        contracts: ContractAddresses,
    ) -> Self {
        Self {
            signer,
            reader,
            contracts,
        }
    }

    #[must_use]
    pub fn signer(&self) -> &dyn WalletSigner {
        self.signer.as_ref()
    }

    #[must_use]
    pub fn reader(&self) -> &dyn ChainReader {
        self.reader.as_ref()
    }

    #[must_use]
    pub const fn contracts(&self) -> &ContractAddresses {
        &self.contracts
    }

    /// Address of the connected account.
    #[must_use]
    pub fn account(&self) -> Address {
        self.signer.account()
    }
}

impl std::fmt::Debug for WalletContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletContext")
            .field("account", &self.account())
            .field("contracts", &self.contracts)
            .finish_non_exhaustive()
    }
}
