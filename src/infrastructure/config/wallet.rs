//! Wallet key material.

/// Signer key material.
/// Loaded from `WALLET_PRIVATE_KEY` at runtime, never from the config file.
#[derive(Clone, Default)]
pub struct WalletConfig {
    pub private_key: Option<String>,
}

impl WalletConfig {
    /// Whether a non-blank key is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.private_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl std::fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConfig")
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
