//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Adjust the level for `-q` and `-v` flags.
    #[must_use]
    pub fn with_verbosity(mut self, quiet: bool, verbose: u8) -> Self {
        self.level = match (quiet, verbose) {
            (true, _) => "warn".into(),
            (false, 0) => self.level,
            (false, 1) => "debug".into(),
            (false, _) => "trace".into(),
        };
        self
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr so stdout stays clean for command output.
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        // Already installed (tests, repeated init).
        let _ = result;
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_flags_adjust_level() {
        let base = LoggingConfig::default();
        assert_eq!(base.clone().with_verbosity(false, 0).level, "info");
        assert_eq!(base.clone().with_verbosity(false, 1).level, "debug");
        assert_eq!(base.clone().with_verbosity(false, 3).level, "trace");
        assert_eq!(base.with_verbosity(true, 2).level, "warn");
    }
}
