//! Inbound operator accessor for CLI handlers.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{ConfigError, Result};
use crate::port::inbound::operator::port::OperatorPort;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "bitredict.toml";

static OPERATOR: OnceLock<Box<dyn OperatorPort>> = OnceLock::new();

/// Installs the operator implementation used by CLI handlers.
pub fn install(operator: Box<dyn OperatorPort>) -> std::result::Result<(), Box<dyn OperatorPort>> {
    OPERATOR.set(operator)
}

/// Returns the configured operator capability surface for CLI handlers.
#[must_use]
pub fn operator() -> &'static dyn OperatorPort {
    OPERATOR
        .get()
        .expect("CLI operator not installed; call cli::operator::install from main")
        .as_ref()
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Locate the config file: `path` if given, else [`DEFAULT_CONFIG_FILE`] if
/// it exists, else none.
#[must_use]
pub fn config_source(path: Option<&Path>) -> ConfigSource {
    match path {
        Some(path) => ConfigSource::File(path.to_path_buf()),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            ConfigSource::File(PathBuf::from(DEFAULT_CONFIG_FILE))
        }
        None => ConfigSource::Defaults,
    }
}

/// Load config TOML for operator-facing use-cases.
///
/// Built-in defaults are an empty document.
///
/// # Errors
///
/// Returns an error if a config file is selected but cannot be read.
#[allow(clippy::result_large_err)]
pub fn read_config_toml(source: &ConfigSource) -> Result<String> {
    match source {
        ConfigSource::File(path) => {
            Ok(std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?)
        }
        ConfigSource::Defaults => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_path_wins() {
        let source = config_source(Some(Path::new("custom.toml")));
        assert_eq!(source, ConfigSource::File(PathBuf::from("custom.toml")));
        assert_eq!(source.to_string(), "custom.toml");
    }

    #[test]
    fn defaults_read_as_empty_document() {
        assert_eq!(read_config_toml(&ConfigSource::Defaults).unwrap(), "");
        assert_eq!(ConfigSource::Defaults.to_string(), "built-in defaults");
    }

    #[test]
    fn file_contents_are_returned() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chain]\nchain_id = 1").unwrap();
        let source = ConfigSource::File(file.path().to_path_buf());
        assert!(read_config_toml(&source).unwrap().contains("chain_id = 1"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = ConfigSource::File(PathBuf::from("/nonexistent/bitredict.toml"));
        let err = read_config_toml(&source).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }
}
