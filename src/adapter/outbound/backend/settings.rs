//! Guided-market backend configuration.

use serde::Deserialize;

/// Default backend serving the guided-market endpoints.
pub const DEFAULT_API_URL: &str = "https://bitr-backend.fly.dev";

/// HTTP settings for the guided-market backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendConfig {
    /// Base URL; endpoints live under `/api/guided-markets`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.into()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
